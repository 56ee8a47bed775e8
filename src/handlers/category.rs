use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Router};
use serde::Serialize;

use crate::{
    db::{Category, Question},
    extractors::{Path, Query},
    pagination::{paginate, PageQuery},
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}

/// Category id to display label, ordered by id.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<axum::Json<CategoriesResponse>, AppError> {
    let categories = state
        .db
        .categories()
        .await
        .reject("could not list categories")?;

    if categories.is_empty() {
        return Err(AppError::NotFound("no categories"));
    }

    Ok(axum::Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> Result<axum::Json<CategoryQuestionsResponse>, AppError> {
    let category = state
        .db
        .category(category_id)
        .await
        .reject("could not look up category")?
        .ok_or(AppError::NotFound("no category with this id"))?;

    let questions = state
        .db
        .questions_in_category(category.id)
        .await
        .reject("could not list questions in category")?;

    Ok(axum::Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}
