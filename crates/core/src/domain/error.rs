use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid page: {0}. pages are numbered from 1")]
    InvalidPage(i64),
}
