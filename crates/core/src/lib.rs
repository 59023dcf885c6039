//! Pure domain logic for the trivia API: ids, pagination and quiz selection.

pub mod domain;
