mod error;
mod ids;
mod pagination;
mod quiz;

pub use error::DomainError;
pub use ids::{CategoryId, QuestionId};
pub use pagination::{Page, QUESTIONS_PER_PAGE, paginate};
pub use quiz::{QuizCandidate, QuizScope, select_next_question, select_next_question_with};
