// src/exam/scorer.rs

use crate::config::element_rules;
use crate::models::exam::{AnswerRecord, ScoreResult};

/// Scores a completed exam attempt against the element's pass threshold.
///
/// Correctness is decided purely from values captured on the answer
/// records; an unsubmitted answer never counts. The denominator is the
/// element's regulatory question count. An unrecognized element degrades
/// into a guaranteed fail with a literal "None" total in the display
/// string, matching the legacy formatter.
pub fn score_exam(answers: &[AnswerRecord], element: i64) -> ScoreResult {
    let correct = answers
        .iter()
        .filter(|record| record.answer == Some(record.correct_answer))
        .count() as i64;

    match element_rules(element) {
        Some(rules) => {
            let passed = correct >= rules.pass_threshold;
            let verdict = if passed { "Pass" } else { "Fail" };
            ScoreResult {
                correct,
                total: Some(rules.total_questions),
                passed,
                display: format!(
                    "Score: {}/{} ({})",
                    correct, rules.total_questions, verdict
                ),
            }
        }
        None => {
            tracing::warn!("scoring exam with unsupported element {}", element);
            ScoreResult {
                correct,
                total: None,
                passed: false,
                display: format!("Score: {}/None (Fail)", correct),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds `correct` answered-right records followed by `wrong`
    /// answered-wrong ones.
    fn answers(correct: usize, wrong: usize) -> Vec<AnswerRecord> {
        let mut records = Vec::with_capacity(correct + wrong);
        for i in 0..correct + wrong {
            records.push(AnswerRecord {
                exam_id: 1,
                question_id: i as i64 + 1,
                question_number: i as i64 + 1,
                answer: Some(if i < correct { 1 } else { 0 }),
                correct_answer: 1,
            });
        }
        records
    }

    #[test]
    fn test_score_pass_tech_exam() {
        let result = score_exam(&answers(26, 9), 2);
        assert_eq!(result.display, "Score: 26/35 (Pass)");
        assert!(result.passed);
        assert_eq!(result.correct, 26);
        assert_eq!(result.total, Some(35));
    }

    #[test]
    fn test_score_fail_tech_exam() {
        let result = score_exam(&answers(25, 10), 2);
        assert_eq!(result.display, "Score: 25/35 (Fail)");
        assert!(!result.passed);
    }

    #[test]
    fn test_score_pass_general_exam() {
        let result = score_exam(&answers(30, 5), 3);
        assert_eq!(result.display, "Score: 30/35 (Pass)");
        assert!(result.passed);
    }

    #[test]
    fn test_score_fail_general_exam() {
        let result = score_exam(&answers(20, 15), 3);
        assert_eq!(result.display, "Score: 20/35 (Fail)");
        assert!(!result.passed);
    }

    #[test]
    fn test_score_pass_extra_exam() {
        let result = score_exam(&answers(37, 13), 4);
        assert_eq!(result.display, "Score: 37/50 (Pass)");
        assert!(result.passed);
    }

    #[test]
    fn test_score_fail_extra_exam() {
        let result = score_exam(&answers(36, 14), 4);
        assert_eq!(result.display, "Score: 36/50 (Fail)");
        assert!(!result.passed);
    }

    #[test]
    fn test_score_invalid_element() {
        let result = score_exam(&answers(10, 0), 1);
        assert_eq!(result.display, "Score: 10/None (Fail)");
        assert_eq!(result.total, None);
        assert!(!result.passed);
    }

    #[test]
    fn test_score_no_answers() {
        assert_eq!(score_exam(&[], 2).display, "Score: 0/35 (Fail)");
        assert_eq!(score_exam(&[], 3).display, "Score: 0/35 (Fail)");
        assert_eq!(score_exam(&[], 4).display, "Score: 0/50 (Fail)");
    }

    #[test]
    fn test_unsubmitted_answer_never_counts() {
        let mut records = answers(26, 0);
        records[0].answer = None;

        let result = score_exam(&records, 2);
        assert_eq!(result.correct, 25);
        assert_eq!(result.display, "Score: 25/35 (Fail)");
    }
}
