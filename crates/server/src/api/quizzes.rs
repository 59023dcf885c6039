//! 测验 API 路由。

use std::collections::HashSet;
use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use trivia_api_types::{QuestionDto, QuizRequest, QuizResponse};
use trivia_core::domain::{QuestionId, QuizScope, select_next_question};

use super::error::ApiError;
use super::extract::ApiJson;
use super::state::AppState;

pub fn create_quizzes_router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_quiz_question))
}

/// 随机返回一道未出过的题目，题目用尽时返回 `null`。
async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let previous: HashSet<QuestionId> = request
        .previous_questions
        .into_iter()
        .map(QuestionId::new)
        .collect();
    let scope = QuizScope::from_category_id(request.quiz_category.id);

    let candidates = state.questions.list_all().await?;
    let question = select_next_question(candidates, &previous, scope).map(QuestionDto::from);

    Ok(Json(QuizResponse { question }))
}
