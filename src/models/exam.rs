// src/models/exam.rs

use serde::{Deserialize, Serialize};

/// One candidate's instance of taking an exam drawn from a pool.
/// Created open at launch, closed when the candidate finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamAttempt {
    pub id: i64,
    pub user_id: i64,
    pub pool_id: i64,
    pub session_id: i64,
    pub element: i64,
    pub open: bool,
}

/// The per-question record of what was asked and what was answered.
///
/// `correct_answer` is captured when the exam is drawn, so editing or
/// deleting a question later never changes the score of exams already taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub exam_id: i64,
    pub question_id: i64,

    /// 1-based position of the question within the exam.
    pub question_number: i64,

    /// The candidate's submitted answer index, `None` until submitted.
    pub answer: Option<i64>,

    pub correct_answer: i64,
}

/// Outcome of scoring one exam attempt.
///
/// `total` is the regulatory question count for the element, `None` when
/// the element is unrecognized (the attempt is then an unconditional fail).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub correct: i64,
    pub total: Option<i64>,
    pub passed: bool,
    pub display: String,
}
