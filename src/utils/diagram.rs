// src/utils/diagram.rs

use crate::models::question::{ExamDiagram, Question};

/// Finds the diagram a question refers to, if any: the first of the pool's
/// diagrams whose name occurs in the question text.
pub fn requires_diagram<'a>(
    question: &Question,
    diagrams: &'a [ExamDiagram],
) -> Option<&'a ExamDiagram> {
    if question.text.is_empty() {
        return None;
    }

    diagrams
        .iter()
        .find(|diagram| diagram.pool_id == question.pool_id && question.text.contains(&diagram.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str) -> Question {
        Question {
            id: 1,
            pool_id: 1,
            number: "T1A01".to_string(),
            correct_answer: 0,
            text: text.to_string(),
            option_a: "A".to_string(),
            option_b: "B".to_string(),
            option_c: "C".to_string(),
            option_d: "D".to_string(),
            refs: None,
        }
    }

    fn diagram(pool_id: i64, name: &str) -> ExamDiagram {
        ExamDiagram {
            id: 1,
            pool_id,
            name: name.to_string(),
            path: format!("diagrams/{}.jpg", name),
        }
    }

    #[test]
    fn test_matching_diagram() {
        let diagrams = vec![diagram(1, "D-1")];
        let found = requires_diagram(&question("Refer to diagram D-1"), &diagrams);

        assert_eq!(found.map(|d| d.name.as_str()), Some("D-1"));
    }

    #[test]
    fn test_no_matching_diagram() {
        let diagrams = vec![diagram(1, "D-1")];
        assert!(requires_diagram(&question("No diagram needed"), &diagrams).is_none());
    }

    #[test]
    fn test_no_diagrams() {
        assert!(requires_diagram(&question("Refer to diagram D-1"), &[]).is_none());
    }

    #[test]
    fn test_empty_question_text() {
        let diagrams = vec![diagram(1, "D-1")];
        assert!(requires_diagram(&question(""), &diagrams).is_none());
    }

    #[test]
    fn test_diagram_from_other_pool_ignored() {
        let diagrams = vec![diagram(2, "D-1")];
        assert!(requires_diagram(&question("Refer to diagram D-1"), &diagrams).is_none());
    }
}
