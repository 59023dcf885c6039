use crate::entity::{category, question};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use trivia_core::domain::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub kind: String,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, kind: &str) -> Result<CategoryRecord>;
    async fn list_all(&self) -> Result<Vec<CategoryRecord>>;
    async fn find_by_id(&self, category_id: CategoryId) -> Result<Option<CategoryRecord>>;
    /// Removes the category together with its questions. Returns `false`
    /// when no such category existed.
    async fn delete(&self, category_id: CategoryId) -> Result<bool>;
}

#[derive(Clone)]
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: category::Model) -> CategoryRecord {
        CategoryRecord {
            id: CategoryId::new(model.id),
            kind: model.kind,
        }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn create(&self, kind: &str) -> Result<CategoryRecord> {
        let active_model = category::ActiveModel {
            kind: Set(kind.to_string()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn list_all(&self) -> Result<Vec<CategoryRecord>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn find_by_id(&self, category_id: CategoryId) -> Result<Option<CategoryRecord>> {
        let model = category::Entity::find_by_id(category_id.value())
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_model))
    }

    async fn delete(&self, category_id: CategoryId) -> Result<bool> {
        let txn = self.db.begin().await?;

        question::Entity::delete_many()
            .filter(question::Column::Category.eq(category_id.value()))
            .exec(&txn)
            .await?;
        let deleted = category::Entity::delete_by_id(category_id.value())
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(deleted.rows_affected > 0)
    }
}
