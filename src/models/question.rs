// src/models/question.rs

use serde::{Deserialize, Serialize};

/// A pool question: syllabus number, text, four answer options and the
/// index of the correct one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub pool_id: i64,

    /// Syllabus number, e.g. "T1A07". The first three characters are the
    /// owning topic-group code.
    pub number: String,

    /// Index of the correct option, 0..=3.
    pub correct_answer: i64,

    /// The text content of the question.
    pub text: String,

    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,

    /// Rule-part references for the question, if any.
    pub refs: Option<String>,
}

impl Question {
    /// The topic-group code the question belongs to: the first three
    /// characters of its syllabus number.
    pub fn topic_code(&self) -> &str {
        self.number.get(..3).unwrap_or(&self.number)
    }
}

/// A diagram attached to a pool, referenced by name from question text.
/// File handling lives outside the engine; only the metadata is carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamDiagram {
    pub id: i64,
    pub pool_id: i64,

    /// Token questions use to reference the diagram, e.g. "D-1".
    pub name: String,

    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_code_is_number_prefix() {
        let question = Question {
            id: 1,
            pool_id: 1,
            number: "T1A07".to_string(),
            correct_answer: 0,
            text: "What is 1+1?".to_string(),
            option_a: "2".to_string(),
            option_b: "3".to_string(),
            option_c: "4".to_string(),
            option_d: "5".to_string(),
            refs: None,
        };
        assert_eq!(question.topic_code(), "T1A");
    }

    #[test]
    fn test_topic_code_short_number() {
        let question = Question {
            id: 1,
            pool_id: 1,
            number: "T1".to_string(),
            correct_answer: 0,
            text: String::new(),
            option_a: String::new(),
            option_b: String::new(),
            option_c: String::new(),
            option_d: String::new(),
            refs: None,
        };
        assert_eq!(question.topic_code(), "T1");
    }
}
