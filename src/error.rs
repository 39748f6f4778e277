// src/error.rs

use std::fmt;

/// Exam engine error enum.
/// Centralizes the "cannot build exam" sentinels the caller matches on.
#[derive(Debug, Clone, PartialEq)]
pub enum ExamError {
    // Pool id does not resolve to a pool
    PoolNotFound(i64),

    // Pool has no topic groups registered
    NoTopicGroups(i64),

    // A topic group requires more questions than the pool holds
    QuotaUnsatisfiable {
        pool_id: i64,
        code: String,
        quota: i64,
        available: i64,
    },

    // Pool element is not one of the recognized regulatory classes
    UnsupportedElement(i64),

    // Sampled total does not match the regulatory question count
    IncompleteExam {
        pool_id: i64,
        expected: i64,
        actual: i64,
    },

    // Fault propagated from a storage backend
    Store(String),
}

impl fmt::Display for ExamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ExamError {}
