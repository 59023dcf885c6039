//! Trivia quiz HTTP API server.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod repository;
