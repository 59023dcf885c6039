//! 问题 API 路由。
//!
//! 提供问题列表、搜索、创建和删除。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use tracing::info;
use trivia_api_types::{
    CreateQuestionRequest, QuestionPageResponse, QuestionsRequest, SuccessResponse,
};
use trivia_core::domain::{CategoryId, Page, QuestionId, paginate};

use super::dto::{category_map, question_dtos};
use super::error::ApiError;
use super::extract::{ApiJson, ApiPath, PageParam};
use super::state::AppState;
use crate::repository::NewQuestion;

/// 创建问题 API 路由。
pub fn create_questions_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/questions",
            get(list_questions).post(search_or_create_question),
        )
        .route("/questions/{question_id}", delete(delete_question))
}

async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageParam(page): PageParam,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let questions = state.questions.list_all().await?;
    let total_questions = questions.len();
    let categories = state.categories.list_all().await?;

    Ok(Json(QuestionPageResponse {
        questions: question_dtos(paginate(page, questions)),
        total_questions,
        categories: Some(category_map(categories)),
        current_category: None,
    }))
}

async fn delete_question(
    State(state): State<Arc<AppState>>,
    ApiPath(question_id): ApiPath<i32>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let question_id = QuestionId::new(question_id);
    if !state.questions.delete(question_id).await? {
        return Err(ApiError::NotFound);
    }

    info!(%question_id, "question deleted");
    Ok(Json(SuccessResponse::ok()))
}

/// `POST /questions`：请求体含 `searchTerm` 时搜索，否则创建问题。
async fn search_or_create_question(
    State(state): State<Arc<AppState>>,
    PageParam(page): PageParam,
    ApiJson(request): ApiJson<QuestionsRequest>,
) -> Result<Response, ApiError> {
    match request {
        QuestionsRequest::Search(search) => {
            let response = search_questions(&state, &search.search_term, page).await?;
            Ok(Json(response).into_response())
        }
        QuestionsRequest::Create(create) => {
            create_question(&state, create).await?;
            Ok(Json(SuccessResponse::ok()).into_response())
        }
    }
}

async fn search_questions(
    state: &AppState,
    term: &str,
    page: Page,
) -> Result<QuestionPageResponse, ApiError> {
    let questions = state.questions.search(term).await?;
    let total_questions = questions.len();

    Ok(QuestionPageResponse {
        questions: question_dtos(paginate(page, questions)),
        total_questions,
        categories: None,
        current_category: None,
    })
}

async fn create_question(state: &AppState, request: CreateQuestionRequest) -> Result<(), ApiError> {
    let category = state
        .categories
        .find_by_id(CategoryId::new(request.category))
        .await?
        .ok_or(ApiError::NotFound)?;

    let created = state
        .questions
        .create(NewQuestion {
            question: request.question,
            answer: request.answer,
            category: category.id,
            difficulty: request.difficulty,
        })
        .await?;

    info!(question_id = %created.id, category_id = %created.category, "question created");
    Ok(())
}
