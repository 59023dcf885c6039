//! 通过 [`ApiError`] 报告失败的提取器。

use std::convert::Infallible;

use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use trivia_core::domain::Page;

use super::error::ApiError;

/// JSON 请求体，解析失败时返回统一错误格式。
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// 路径参数。无法解析的路径段视为资源不存在。
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// 分页查询参数。
#[derive(Debug, Deserialize)]
struct PageQuery {
    /// 页码（从 1 开始）。
    page: Option<String>,
}

/// `page` 查询参数。不会拒绝请求，无效值按第 1 页处理。
#[derive(Debug, Clone, Copy)]
pub struct PageParam(pub Page);

impl<S> FromRequestParts<S> for PageParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<PageQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.page);

        Ok(Self(Page::from_query(raw.as_deref())))
    }
}
