// src/exam/quota.rs

use crate::config::element_rules;
use crate::error::ExamError;
use crate::store::PoolStore;

/// One topic group's slice of an exam: its code, the quota of questions an
/// exam must draw from it, and the number available in the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupQuota {
    pub code: String,
    pub quota: i64,
    pub available: i64,
}

/// Derives the full quota table for a pool and validates that every quota
/// can be honored by the questions actually present.
///
/// * Read-only; one entry per registered topic group, in store order.
/// * Zero-quota groups stay in the table (the sampler skips them).
/// * Duplicate group codes are passed through independently.
pub async fn build_quota_index<S>(store: &S, pool_id: i64) -> Result<Vec<GroupQuota>, ExamError>
where
    S: PoolStore + ?Sized,
{
    let pool = store
        .get_pool(pool_id)
        .await?
        .ok_or(ExamError::PoolNotFound(pool_id))?;

    if element_rules(pool.element).is_none() {
        return Err(ExamError::UnsupportedElement(pool.element));
    }

    let groups = store.get_topic_groups(pool_id).await?;
    if groups.is_empty() {
        return Err(ExamError::NoTopicGroups(pool_id));
    }

    let mut index = Vec::with_capacity(groups.len());
    for group in groups {
        let available = store.get_questions(pool_id, &group.code).await?.len() as i64;
        if available < group.quantity {
            tracing::warn!(
                "pool {}: group {} requires {} questions but only {} exist",
                pool_id,
                group.code,
                group.quantity,
                available
            );
            return Err(ExamError::QuotaUnsatisfiable {
                pool_id,
                code: group.code,
                quota: group.quantity,
                available,
            });
        }

        index.push(GroupQuota {
            code: group.code,
            quota: group.quantity,
            available,
        });
    }

    Ok(index)
}
