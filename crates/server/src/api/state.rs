//! 统一的应用状态。

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{
    CategoryRepository, QuestionRepository, SeaOrmCategoryRepository, SeaOrmQuestionRepository,
};

/// 统一的应用状态，启动时基于数据库连接池创建一次。
#[derive(Clone)]
pub struct AppState {
    /// 分类仓储。
    pub categories: Arc<dyn CategoryRepository>,
    /// 问题仓储。
    pub questions: Arc<dyn QuestionRepository>,
}

impl AppState {
    /// 创建新的应用状态。
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            categories: Arc::new(SeaOrmCategoryRepository::new(db.clone())),
            questions: Arc::new(SeaOrmQuestionRepository::new(db)),
        }
    }
}
