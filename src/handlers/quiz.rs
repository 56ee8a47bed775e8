//! Quiz play. The server keeps no session: every call carries the ids the
//! player has already seen, and the caller appends the served id for the
//! next turn.

use std::collections::HashSet;

use axum::{extract::State, routing::post, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::{
    db::Question,
    extractors::Json,
    models::deserialize_optional_i64,
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    id: Option<i64>,
}

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    quiz_category: Option<QuizCategory>,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

#[derive(Serialize)]
struct QuizTurnResponse {
    success: bool,
    question: Option<Question>,
    #[serde(rename = "previousQuestions")]
    previous_questions: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Outcome of picking the next quiz question.
#[derive(Debug, PartialEq)]
enum QuizPick {
    /// The category holds no questions at all.
    NoQuestions,
    /// Every question has already been asked.
    Exhausted,
    Next(Question),
}

/// Pick uniformly among `candidates` whose id is not in `previous`.
fn pick_unseen<R: rand::Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> QuizPick {
    if candidates.is_empty() {
        return QuizPick::NoQuestions;
    }

    let asked: HashSet<i64> = previous.iter().copied().collect();
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !asked.contains(&q.id))
        .collect();

    match unseen.choose(rng) {
        Some(question) => QuizPick::Next(question.clone()),
        None => QuizPick::Exhausted,
    }
}

async fn next_question(
    State(state): State<AppState>,
    Json(body): Json<QuizBody>,
) -> Result<axum::Json<QuizTurnResponse>, AppError> {
    let candidates = match body.quiz_category.and_then(|c| c.id) {
        Some(names::ALL_CATEGORIES) => state
            .db
            .questions()
            .await
            .reject("could not list questions")?,
        Some(category_id) => state
            .db
            .questions_in_category(category_id)
            .await
            .reject("could not list questions in category")?,
        None => Vec::new(),
    };

    let pick = pick_unseen(candidates, &body.previous_questions, &mut rand::thread_rng());

    let (question, message) = match pick {
        QuizPick::NoQuestions => {
            return Err(AppError::NotFound("quiz category has no questions"));
        }
        QuizPick::Exhausted => (None, Some(names::QUIZ_EXHAUSTED_MESSAGE)),
        QuizPick::Next(question) => (Some(question), None),
    };

    Ok(axum::Json(QuizTurnResponse {
        success: true,
        question,
        previous_questions: body.previous_questions,
        message,
    }))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            answer: format!("Answer {id}"),
            category: Some(1),
            difficulty: Some(1),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn empty_category_is_distinct_from_exhausted() {
        assert_eq!(pick_unseen(vec![], &[], &mut rng()), QuizPick::NoQuestions);
        assert_eq!(pick_unseen(vec![], &[1, 2], &mut rng()), QuizPick::NoQuestions);
        assert_eq!(
            pick_unseen(vec![question(1), question(2)], &[2, 1], &mut rng()),
            QuizPick::Exhausted
        );
    }

    #[test]
    fn never_repeats_a_previous_question() {
        let previous = [1, 2, 3, 4];
        for seed in 0..50 {
            let candidates = (1..=6).map(question).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            match pick_unseen(candidates, &previous, &mut rng) {
                QuizPick::Next(q) => assert!(q.id == 5 || q.id == 6, "picked {}", q.id),
                other => panic!("expected a question, got {other:?}"),
            }
        }
    }

    #[test]
    fn single_unseen_question_is_served() {
        let candidates = (1..=3).map(question).collect();
        assert_eq!(
            pick_unseen(candidates, &[1, 3], &mut rng()),
            QuizPick::Next(question(2))
        );
    }

    #[test]
    fn unknown_previous_ids_are_ignored() {
        let candidates = vec![question(10)];
        assert_eq!(
            pick_unseen(candidates, &[99, 100], &mut rng()),
            QuizPick::Next(question(10))
        );
    }

    #[test]
    fn body_defaults_when_fields_are_missing() {
        let body: QuizBody = serde_json::from_str("{}").unwrap();
        assert!(body.quiz_category.is_none());
        assert!(body.previous_questions.is_empty());

        let body: QuizBody =
            serde_json::from_str(r#"{"quiz_category": {"id": "5", "type": "Entertainment"}}"#)
                .unwrap();
        assert_eq!(body.quiz_category.and_then(|c| c.id), Some(5));
    }
}
