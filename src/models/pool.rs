// src/models/pool.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A question pool: a versioned, dated collection of questions valid for
/// one license element over a multi-year period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: i64,

    pub name: String,

    /// Regulatory element code: 2 (Technician), 3 (General) or 4 (Extra).
    /// Determines the exam's question count and pass threshold.
    pub element: i64,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Pool {
    /// Whether the pool is valid for exams taken on `date`.
    pub fn is_current(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Per-pool quota for one topic-list identifier (TLI).
///
/// The 3-character code groups questions by subject area; `quantity` is the
/// number of questions an exam drawn from the pool must take from the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicGroup {
    pub id: i64,
    pub pool_id: i64,

    /// 3-character code prefixing the `number` of every question in the group.
    pub code: String,

    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Pool {
        Pool {
            id: 1,
            name: "Technician 2022-2026".to_string(),
            element: 2,
            start_date: NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
        }
    }

    #[test]
    fn test_pool_is_current_inside_range() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(pool().is_current(date));
    }

    #[test]
    fn test_pool_is_current_on_boundaries() {
        let p = pool();
        assert!(p.is_current(p.start_date));
        assert!(p.is_current(p.end_date));
    }

    #[test]
    fn test_pool_is_current_outside_range() {
        let p = pool();
        assert!(!p.is_current(NaiveDate::from_ymd_opt(2022, 6, 30).unwrap()));
        assert!(!p.is_current(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()));
    }
}
