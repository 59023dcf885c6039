//! 仓储记录到接口类型的转换。

use trivia_api_types::{CategoryMap, QuestionDto};

use crate::repository::{CategoryRecord, QuestionRecord};

impl From<QuestionRecord> for QuestionDto {
    fn from(record: QuestionRecord) -> Self {
        Self {
            id: record.id.value(),
            question: record.question,
            answer: record.answer,
            category: record.category.value(),
            difficulty: record.difficulty,
        }
    }
}

pub fn category_map(categories: Vec<CategoryRecord>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id.value(), category.kind))
        .collect()
}

pub fn question_dtos(records: Vec<QuestionRecord>) -> Vec<QuestionDto> {
    records.into_iter().map(QuestionDto::from).collect()
}
