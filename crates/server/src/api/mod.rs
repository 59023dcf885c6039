//! HTTP API 路由模块。
//!
//! 提供问答前端所需的分类、问题和测验接口。

mod categories;
mod dto;
mod error;
mod extract;
mod questions;
mod quizzes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub use categories::create_categories_router;
pub use error::ApiError;
pub use questions::create_questions_router;
pub use quizzes::create_quizzes_router;
pub use state::AppState;

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
    Method::OPTIONS,
];

const ALLOWED_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];

// 与上面两个列表保持一致；非预检响应也带上这两个头。
const ALLOW_METHODS_VALUE: &str = "GET,PATCH,POST,DELETE,OPTIONS";
const ALLOW_HEADERS_VALUE: &str = "content-type,authorization";

/// 创建完整的应用路由。
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(create_categories_router())
        .merge(create_questions_router())
        .merge(create_quizzes_router())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS_VALUE),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS_VALUE),
        ))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
