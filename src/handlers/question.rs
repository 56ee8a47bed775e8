use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::category_map;
use crate::{
    db::Question,
    extractors::{Json, Path, Query},
    models::{deserialize_optional_i64, NewQuestion},
    pagination::{paginate, PageQuery},
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/search", post(search_questions))
}

#[derive(Serialize)]
struct QuestionListResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    /// Always null: no category is selected when browsing every question.
    #[serde(rename = "currentCategory")]
    current_category: Option<String>,
}

async fn list_questions(
    State(state): State<AppState>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> Result<axum::Json<QuestionListResponse>, AppError> {
    let questions = state
        .db
        .questions()
        .await
        .reject("could not list questions")?;

    let page_questions = paginate(&questions, page);
    if page_questions.is_empty() {
        return Err(AppError::NotFound("page is past the last question"));
    }

    let categories = state
        .db
        .categories()
        .await
        .reject("could not list categories")?;

    Ok(axum::Json(QuestionListResponse {
        success: true,
        questions: page_questions.to_vec(),
        total_questions: questions.len(),
        categories: category_map(categories),
        current_category: None,
    }))
}

#[derive(Serialize)]
struct DeleteResponse {
    success: bool,
    deleted: i64,
    total_questions: i64,
}

async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<axum::Json<DeleteResponse>, AppError> {
    state
        .db
        .question(question_id)
        .await
        .reject("could not look up question")?
        .ok_or(AppError::NotFound("no question with this id"))?;

    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    // Removed by a concurrent request between lookup and delete
    if !deleted {
        return Err(AppError::NotFound("no question with this id"));
    }

    let total_questions = state
        .db
        .questions_count()
        .await
        .reject("could not count questions")?;

    Ok(axum::Json(DeleteResponse {
        success: true,
        deleted: question_id,
        total_questions,
    }))
}

#[derive(Deserialize)]
struct CreateQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    difficulty: Option<i64>,
}

#[derive(Serialize)]
struct CreateResponse {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn create_question(
    State(state): State<AppState>,
    Query(PageQuery { page }): Query<PageQuery>,
    body: Result<axum::Json<CreateQuestionBody>, JsonRejection>,
) -> Result<axum::Json<CreateResponse>, AppError> {
    // Every body rejection on this route is a 422
    let axum::Json(body) = body.reject_input("could not read new question")?;

    let (Some(question), Some(answer)) = (body.question, body.answer) else {
        tracing::warn!("question or answer missing from new question");
        return Err(AppError::Input("question and answer are required"));
    };

    let new = NewQuestion {
        question,
        answer,
        category: body.category,
        difficulty: body.difficulty,
    };

    let created = state
        .db
        .insert_question(&new)
        .await
        .reject_input("could not insert question")?;

    let questions = state
        .db
        .questions()
        .await
        .reject_input("could not list questions")?;

    Ok(axum::Json(CreateResponse {
        success: true,
        created,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody {
    // Kept untyped so a non-string term is a 422 rather than a 400
    search_term: Option<Value>,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn search_questions(
    State(state): State<AppState>,
    Query(PageQuery { page }): Query<PageQuery>,
    Json(body): Json<SearchBody>,
) -> Result<axum::Json<SearchResponse>, AppError> {
    let Some(Value::String(term)) = body.search_term else {
        tracing::warn!("search term missing or not a string");
        return Err(AppError::Input("searchTerm must be a string"));
    };

    let questions = state
        .db
        .search_questions(&term)
        .await
        .reject("could not search questions")?;

    Ok(axum::Json(SearchResponse {
        success: true,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
    }))
}
