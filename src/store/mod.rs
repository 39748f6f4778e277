// src/store/mod.rs

pub mod memory;

use async_trait::async_trait;

use crate::error::ExamError;
use crate::models::pool::{Pool, TopicGroup};
use crate::models::question::{ExamDiagram, Question};

pub use memory::MemoryStore;

/// Read-only lookup capabilities the exam engine needs from storage.
///
/// * The engine calls each method at most once per pool/group per
///   invocation and never writes through this trait.
/// * Implementations backed by real persistence belong to the enclosing
///   system; they wrap backend faults in [`ExamError::Store`] so the
///   engine can propagate them untouched.
#[async_trait]
pub trait PoolStore: Send + Sync {
    /// Resolves a pool by id, `None` when it does not exist.
    async fn get_pool(&self, pool_id: i64) -> Result<Option<Pool>, ExamError>;

    /// All topic groups registered for a pool.
    async fn get_topic_groups(&self, pool_id: i64) -> Result<Vec<TopicGroup>, ExamError>;

    /// All questions of a pool whose syllabus number starts with `code`.
    async fn get_questions(&self, pool_id: i64, code: &str) -> Result<Vec<Question>, ExamError>;

    /// All diagrams attached to a pool.
    async fn get_diagrams(&self, pool_id: i64) -> Result<Vec<ExamDiagram>, ExamError>;
}
