//! Next-question selection for a running quiz.

use std::collections::HashSet;

use rand::Rng;

use super::{CategoryId, QuestionId};

/// Anything the quiz can serve as a question.
pub trait QuizCandidate {
    fn question_id(&self) -> QuestionId;
    fn category_id(&self) -> CategoryId;
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    AllCategories,
    Category(CategoryId),
}

impl QuizScope {
    /// Category id the frontend sends for the "All" choice.
    pub const ALL_CATEGORIES_ID: i32 = 0;

    pub fn from_category_id(id: i32) -> Self {
        if id == Self::ALL_CATEGORIES_ID {
            Self::AllCategories
        } else {
            Self::Category(CategoryId::new(id))
        }
    }

    pub fn includes(self, category: CategoryId) -> bool {
        match self {
            Self::AllCategories => true,
            Self::Category(scoped) => scoped == category,
        }
    }
}

/// Picks a random question that is in `scope` and not in `previous`.
/// `None` means the quiz has run out of questions.
pub fn select_next_question<Q: QuizCandidate>(
    candidates: Vec<Q>,
    previous: &HashSet<QuestionId>,
    scope: QuizScope,
) -> Option<Q> {
    select_next_question_with(candidates, previous, scope, &mut rand::thread_rng())
}

pub fn select_next_question_with<Q, R>(
    candidates: Vec<Q>,
    previous: &HashSet<QuestionId>,
    scope: QuizScope,
    rng: &mut R,
) -> Option<Q>
where
    Q: QuizCandidate,
    R: Rng + ?Sized,
{
    let mut remaining: Vec<Q> = candidates
        .into_iter()
        .filter(|candidate| {
            !previous.contains(&candidate.question_id()) && scope.includes(candidate.category_id())
        })
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..remaining.len());
    Some(remaining.swap_remove(index))
}
