// src/main.rs
//
// Exam simulation tool: seeds a synthetic Technician pool into a
// MemoryStore, then drives the full engine path for a batch of simulated
// candidates (generate, answer, score) and reports the aggregate results.

use chrono::{NaiveDate, Utc};
use openwaves_exam::config::{Config, ELEMENT_TECH};
use openwaves_exam::exam::sampler::{build_answer_records, generate_exam_with_rng};
use openwaves_exam::exam::scorer::score_exam;
use openwaves_exam::models::exam::ExamAttempt;
use openwaves_exam::models::pool::Pool;
use openwaves_exam::models::question::{ExamDiagram, Question};
use openwaves_exam::store::{MemoryStore, PoolStore};
use openwaves_exam::utils::diagram::requires_diagram;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const POOL_ID: i64 = 1;
const SESSION_ID: i64 = 1;
const QUESTIONS_PER_GROUP: i64 = 10;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = Config::from_env();

    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .init();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let store = seed_store(&mut rng);

    let pool = store
        .get_pool(POOL_ID)
        .await
        .expect("memory store lookups are infallible")
        .expect("pool was just seeded");
    if !pool.is_current(Utc::now().date_naive()) {
        tracing::warn!("pool '{}' is outside its validity range", pool.name);
    }
    tracing::info!(
        "simulating {} candidates against pool '{}' ({} - {})",
        config.candidates,
        pool.name,
        pool.start_date,
        pool.end_date
    );

    let mut pass_count = 0u32;
    let mut correct_total = 0i64;

    for candidate in 0..config.candidates {
        let exam = match generate_exam_with_rng(&store, POOL_ID, &mut rng).await {
            Ok(exam) => exam,
            Err(e) => {
                tracing::error!("exam generation failed: {}", e);
                std::process::exit(1);
            }
        };

        if candidate == 0 {
            report_diagram_usage(&store, &exam).await;
        }

        let mut attempt = ExamAttempt {
            id: candidate as i64 + 1,
            user_id: candidate as i64 + 1,
            pool_id: POOL_ID,
            session_id: SESSION_ID,
            element: pool.element,
            open: true,
        };

        let mut records = build_answer_records(attempt.id, &exam);
        for record in &mut records {
            record.answer = Some(random_answer(&mut rng, record.correct_answer));
        }
        attempt.open = false;

        let result = score_exam(&records, attempt.element);
        tracing::debug!("candidate {}: {}", attempt.user_id, result.display);

        if result.passed {
            pass_count += 1;
        }
        correct_total += result.correct;
    }

    let summary = serde_json::json!({
        "candidates": config.candidates,
        "passed": pass_count,
        "pass_rate": f64::from(pass_count) / f64::from(config.candidates.max(1)),
        "mean_correct": correct_total as f64 / f64::from(config.candidates.max(1)),
    });
    tracing::info!("simulation finished: {}", summary);
}

/// Builds a synthetic Technician pool: 35 topic groups of ten questions
/// each, one question drawn per group, plus one schematic diagram.
fn seed_store(rng: &mut StdRng) -> MemoryStore {
    let mut store = MemoryStore::new();

    store.add_pool(Pool {
        id: POOL_ID,
        name: "Simulated Technician Pool".to_string(),
        element: ELEMENT_TECH,
        start_date: NaiveDate::from_ymd_opt(2022, 7, 1).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2030, 6, 30).expect("valid date"),
    });

    let mut question_id = 0;
    for code in topic_codes() {
        for position in 1..=QUESTIONS_PER_GROUP {
            question_id += 1;
            let number = format!("{}{:02}", code, position);
            store.add_question(Question {
                id: question_id,
                pool_id: POOL_ID,
                number: number.clone(),
                correct_answer: rng.gen_range(0..4),
                text: if question_id % 50 == 0 {
                    format!("In figure D-1, what does component {} represent?", number)
                } else {
                    format!("Sample question {}", number)
                },
                option_a: "Option A".to_string(),
                option_b: "Option B".to_string(),
                option_c: "Option C".to_string(),
                option_d: "Option D".to_string(),
                refs: None,
            });
        }
        // One question per group; seeding counted all ten
        store.set_topic_group(POOL_ID, &code, 1);
    }

    store.add_diagram(ExamDiagram {
        id: 1,
        pool_id: POOL_ID,
        name: "D-1".to_string(),
        path: "diagrams/d-1.png".to_string(),
    });

    store
}

/// The 35 Technician topic-list identifiers: T1A..T1Z then T2A..T2I.
fn topic_codes() -> Vec<String> {
    let mut codes: Vec<String> = ('A'..='Z').map(|letter| format!("T1{}", letter)).collect();
    codes.extend(('A'..='I').map(|letter| format!("T2{}", letter)));
    codes
}

/// Answers correctly about 76% of the time, otherwise picks a uniformly
/// random wrong option.
fn random_answer(rng: &mut StdRng, correct_answer: i64) -> i64 {
    if rng.gen_range(0.0..1.0) > 0.76 {
        let wrong: Vec<i64> = (0..4).filter(|&option| option != correct_answer).collect();
        wrong[rng.gen_range(0..wrong.len())]
    } else {
        correct_answer
    }
}

async fn report_diagram_usage(store: &MemoryStore, exam: &[Question]) {
    let diagrams = match store.get_diagrams(POOL_ID).await {
        Ok(diagrams) => diagrams,
        Err(e) => {
            tracing::error!("diagram lookup failed: {}", e);
            return;
        }
    };

    let with_diagram = exam
        .iter()
        .filter(|question| requires_diagram(question, &diagrams).is_some())
        .count();
    tracing::info!(
        "first drawn exam references a diagram in {} of {} questions",
        with_diagram,
        exam.len()
    );
}
