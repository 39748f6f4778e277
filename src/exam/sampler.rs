// src/exam/sampler.rs

use rand::Rng;
use rand::thread_rng;

use crate::config::element_rules;
use crate::error::ExamError;
use crate::models::exam::AnswerRecord;
use crate::models::question::Question;
use crate::store::PoolStore;

/// Generates the definitive, shuffled question list for one exam attempt.
///
/// For every topic group of the pool, draws exactly the group's quota of
/// questions without replacement, then checks the flat total against the
/// element's regulatory count. Any shortfall aborts the whole attempt; a
/// partial exam is never returned.
pub async fn generate_exam<S>(store: &S, pool_id: i64) -> Result<Vec<Question>, ExamError>
where
    S: PoolStore + ?Sized,
{
    generate_exam_with_rng(store, pool_id, &mut thread_rng()).await
}

/// Same as [`generate_exam`] but samples through the caller's RNG, so tests
/// can assert quota behavior under a seeded generator.
pub async fn generate_exam_with_rng<S, R>(
    store: &S,
    pool_id: i64,
    rng: &mut R,
) -> Result<Vec<Question>, ExamError>
where
    S: PoolStore + ?Sized,
    R: Rng,
{
    let pool = store
        .get_pool(pool_id)
        .await?
        .ok_or(ExamError::PoolNotFound(pool_id))?;

    let rules =
        element_rules(pool.element).ok_or(ExamError::UnsupportedElement(pool.element))?;

    let groups = store.get_topic_groups(pool_id).await?;
    if groups.is_empty() {
        tracing::warn!("pool {}: no topic groups registered", pool_id);
        return Err(ExamError::NoTopicGroups(pool_id));
    }

    let mut exam = Vec::with_capacity(rules.total_questions as usize);
    for group in groups {
        let questions = store.get_questions(pool_id, &group.code).await?;
        if (questions.len() as i64) < group.quantity {
            tracing::warn!(
                "pool {}: group {} requires {} questions but only {} exist",
                pool_id,
                group.code,
                group.quantity,
                questions.len()
            );
            return Err(ExamError::QuotaUnsatisfiable {
                pool_id,
                code: group.code,
                quota: group.quantity,
                available: questions.len() as i64,
            });
        }

        if group.quantity == 0 {
            continue;
        }

        exam.extend(sample_without_replacement(
            questions,
            group.quantity as usize,
            rng,
        ));
    }

    if exam.len() as i64 != rules.total_questions {
        tracing::error!(
            "pool {}: sampled {} questions, element {} requires {}",
            pool_id,
            exam.len(),
            pool.element,
            rules.total_questions
        );
        return Err(ExamError::IncompleteExam {
            pool_id,
            expected: rules.total_questions,
            actual: exam.len() as i64,
        });
    }

    tracing::debug!(
        "pool {}: generated {}-question {} exam",
        pool_id,
        exam.len(),
        rules.name
    );

    Ok(exam)
}

/// Builds the answer placeholders the caller persists for a freshly drawn
/// exam: sequence numbers are 1-based list positions, the correct answer is
/// captured at creation time and the candidate's answer starts empty.
pub fn build_answer_records(exam_id: i64, questions: &[Question]) -> Vec<AnswerRecord> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| AnswerRecord {
            exam_id,
            question_id: question.id,
            question_number: index as i64 + 1,
            answer: None,
            correct_answer: question.correct_answer,
        })
        .collect()
}

/// Partial Fisher-Yates shuffle: uniformly draws `count` questions without
/// replacement by swapping a random remaining element into each position.
fn sample_without_replacement<R: Rng>(
    mut questions: Vec<Question>,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    debug_assert!(count <= questions.len());

    for i in 0..count {
        let j = rng.gen_range(i..questions.len());
        questions.swap(i, j);
    }
    questions.truncate(count);
    questions
}
