// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ExamError;
use crate::models::pool::{Pool, TopicGroup};
use crate::models::question::{ExamDiagram, Question};
use crate::store::PoolStore;

/// In-memory [`PoolStore`] used by the test suites and the simulation
/// binary. Seed it up front, then hand out shared references to the engine.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pools: HashMap<i64, Pool>,
    groups: HashMap<i64, Vec<TopicGroup>>,
    questions: HashMap<i64, Vec<Question>>,
    diagrams: HashMap<i64, Vec<ExamDiagram>>,
    next_group_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pool(&mut self, pool: Pool) {
        self.pools.insert(pool.id, pool);
    }

    /// Seeds one question and bumps the quantity of its topic group,
    /// creating the group on first sight. This mirrors how the question
    /// upload path counts TLI codes while ingesting a pool; use
    /// [`set_topic_group`](Self::set_topic_group) afterwards when a quota
    /// must differ from the seeded question count.
    pub fn add_question(&mut self, question: Question) {
        let pool_id = question.pool_id;
        let code = question.topic_code().to_string();

        let groups = self.groups.entry(pool_id).or_default();
        match groups.iter_mut().find(|g| g.code == code) {
            Some(group) => group.quantity += 1,
            None => {
                self.next_group_id += 1;
                groups.push(TopicGroup {
                    id: self.next_group_id,
                    pool_id,
                    code,
                    quantity: 1,
                });
            }
        }

        self.questions.entry(pool_id).or_default().push(question);
    }

    /// Sets (or creates) a topic group with an explicit quota, overriding
    /// whatever quantity question seeding accumulated for the code.
    pub fn set_topic_group(&mut self, pool_id: i64, code: &str, quantity: i64) {
        let groups = self.groups.entry(pool_id).or_default();
        match groups.iter_mut().find(|g| g.code == code) {
            Some(group) => group.quantity = quantity,
            None => {
                self.next_group_id += 1;
                groups.push(TopicGroup {
                    id: self.next_group_id,
                    pool_id,
                    code: code.to_string(),
                    quantity,
                });
            }
        }
    }

    pub fn add_diagram(&mut self, diagram: ExamDiagram) {
        self.diagrams.entry(diagram.pool_id).or_default().push(diagram);
    }
}

#[async_trait]
impl PoolStore for MemoryStore {
    async fn get_pool(&self, pool_id: i64) -> Result<Option<Pool>, ExamError> {
        Ok(self.pools.get(&pool_id).cloned())
    }

    async fn get_topic_groups(&self, pool_id: i64) -> Result<Vec<TopicGroup>, ExamError> {
        Ok(self.groups.get(&pool_id).cloned().unwrap_or_default())
    }

    async fn get_questions(&self, pool_id: i64, code: &str) -> Result<Vec<Question>, ExamError> {
        let questions = self
            .questions
            .get(&pool_id)
            .map(|all| {
                all.iter()
                    .filter(|q| q.number.starts_with(code))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(questions)
    }

    async fn get_diagrams(&self, pool_id: i64) -> Result<Vec<ExamDiagram>, ExamError> {
        Ok(self.diagrams.get(&pool_id).cloned().unwrap_or_default())
    }
}
