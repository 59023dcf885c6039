//! API 错误类型及其统一的 JSON 响应格式。

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};
use trivia_api_types::ErrorResponse;

/// API 错误类型，在边界处统一映射为状态码和错误响应体。
#[derive(Debug, Error)]
pub enum ApiError {
    /// JSON 语法错误或缺少 JSON Content-Type。
    #[error("Bad request")]
    BadRequest,

    /// 问题或分类不存在。
    #[error("Resource not found")]
    NotFound,

    /// 路径存在但不支持该方法。
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// JSON 合法但缺少必需字段。
    #[error("Something went wrong")]
    Unprocessable,

    /// 数据库等内部错误，细节只写日志。
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection.body_text(), "rejected JSON body");
        match rejection {
            // JSON 合法但结构不符。
            JsonRejection::JsonDataError(_) => ApiError::Unprocessable,
            _ => ApiError::BadRequest,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        debug!(error = %rejection.body_text(), "rejected path parameter");
        ApiError::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            error!(error = ?err, "request failed");
        }

        let status = self.status();
        let body = Json(ErrorResponse::new(status.as_u16(), self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use anyhow::anyhow;
    use axum::Json;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde::Deserialize;
    use serde_json::{Value, json};

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Payload {
        previous_questions: Vec<i32>,
    }

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read error body");
        let body = serde_json::from_slice(&bytes).expect("error body should be JSON");
        (status, body)
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let err = ApiError::from(anyhow!("SELECT * FROM questions failed: disk I/O error"));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "success": false, "error": 500, "message": "Internal server error" })
        );
    }

    #[tokio::test]
    async fn json_missing_field_is_unprocessable() {
        let rejection = Json::<Payload>::from_bytes(br#"{"quiz_category": {"id": 0}}"#)
            .expect_err("missing field should be rejected");

        let (status, body) = render(ApiError::from(rejection)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({ "success": false, "error": 422, "message": "Something went wrong" })
        );
    }

    #[tokio::test]
    async fn json_syntax_error_is_bad_request() {
        let rejection = Json::<Payload>::from_bytes(br#"{"previous_questions": ["#)
            .expect_err("truncated JSON should be rejected");

        let (status, body) = render(ApiError::from(rejection)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "success": false, "error": 400, "message": "Bad request" })
        );
    }
}
