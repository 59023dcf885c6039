use crate::entity::{category, question};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::sea_query::{BinOper, Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use trivia_core::domain::{CategoryId, QuestionId, QuizCandidate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl QuizCandidate for QuestionRecord {
    fn question_id(&self) -> QuestionId {
        self.id
    }

    fn category_id(&self) -> CategoryId {
        self.category
    }
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, new_question: NewQuestion) -> Result<QuestionRecord>;
    async fn find_by_id(&self, question_id: QuestionId) -> Result<Option<QuestionRecord>>;
    async fn list_all(&self) -> Result<Vec<QuestionRecord>>;
    async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<QuestionRecord>>;
    /// Case-insensitive substring match on the question text.
    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>>;
    /// Replaces every column of an existing question.
    async fn update(&self, record: QuestionRecord) -> Result<Option<QuestionRecord>>;
    /// Returns `false` when the question did not exist.
    async fn delete(&self, question_id: QuestionId) -> Result<bool>;
}

#[derive(Clone)]
pub struct SeaOrmQuestionRepository {
    db: DatabaseConnection,
}

impl SeaOrmQuestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: question::Model) -> QuestionRecord {
        QuestionRecord {
            id: QuestionId::new(model.id),
            question: model.question,
            answer: model.answer,
            category: CategoryId::new(model.category),
            difficulty: model.difficulty,
        }
    }
}

#[async_trait]
impl QuestionRepository for SeaOrmQuestionRepository {
    async fn create(&self, new_question: NewQuestion) -> Result<QuestionRecord> {
        let active_model = question::ActiveModel {
            question: Set(new_question.question),
            answer: Set(new_question.answer),
            category: Set(new_question.category.value()),
            difficulty: Set(new_question.difficulty),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn find_by_id(&self, question_id: QuestionId) -> Result<Option<QuestionRecord>> {
        let model = question::Entity::find_by_id(question_id.value())
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_model))
    }

    async fn list_all(&self) -> Result<Vec<QuestionRecord>> {
        let models = question::Entity::find()
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<QuestionRecord>> {
        let Some(category) = category::Entity::find_by_id(category_id.value())
            .one(&self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let models = category
            .find_related(question::Entity)
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<QuestionRecord>> {
        // Both sides go through the database's LOWER() so they fold the same way.
        let pattern = Func::lower(Expr::val(format!("%{term}%")));

        let models = question::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(question::Column::Question)))
                    .binary(BinOper::Like, pattern),
            )
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn update(&self, record: QuestionRecord) -> Result<Option<QuestionRecord>> {
        let Some(model) = question::Entity::find_by_id(record.id.value())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: question::ActiveModel = model.into();
        active_model.question = Set(record.question);
        active_model.answer = Set(record.answer);
        active_model.category = Set(record.category.value());
        active_model.difficulty = Set(record.difficulty);

        let updated = active_model.update(&self.db).await?;
        Ok(Some(Self::map_model(updated)))
    }

    async fn delete(&self, question_id: QuestionId) -> Result<bool> {
        let deleted = question::Entity::delete_by_id(question_id.value())
            .exec(&self.db)
            .await?;

        Ok(deleted.rows_affected > 0)
    }
}
