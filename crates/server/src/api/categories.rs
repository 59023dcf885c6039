//! 分类 API 路由。

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use trivia_api_types::{CategoriesResponse, QuestionPageResponse};
use trivia_core::domain::{CategoryId, paginate};

use super::dto::{category_map, question_dtos};
use super::error::ApiError;
use super::extract::{ApiPath, PageParam};
use super::state::AppState;

/// 创建分类 API 路由。
pub fn create_categories_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(list_questions_by_category),
        )
}

/// 列出所有分类。
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.categories.list_all().await?;

    Ok(Json(CategoriesResponse {
        categories: category_map(categories),
    }))
}

/// 按分类分页列出问题。
async fn list_questions_by_category(
    State(state): State<Arc<AppState>>,
    ApiPath(category_id): ApiPath<i32>,
    PageParam(page): PageParam,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let category = state
        .categories
        .find_by_id(CategoryId::new(category_id))
        .await?
        .ok_or(ApiError::NotFound)?;

    let questions = state.questions.list_by_category(category.id).await?;
    let total_questions = questions.len();

    Ok(Json(QuestionPageResponse {
        questions: question_dtos(paginate(page, questions)),
        total_questions,
        categories: None,
        current_category: Some(category.id.value()),
    }))
}
