use crate::db::repo::category::CategoryRepo;
use crate::db::{Db, DbResult, map_row_opt};
use crate::models::category::Category;
use crate::models::types::CategoryId;
use std::sync::Arc;

pub struct CategoryRepository {
    db: Arc<Db>,
}

impl CategoryRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl CategoryRepo for CategoryRepository {
    async fn get(&self, category_id: CategoryId) -> DbResult<Option<Category>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM categories WHERE id = $1")
            .await?;

        let row_opt = client.query_opt(&stmt, &[&category_id]).await?;
        map_row_opt(
            row_opt,
            Category::try_from_row,
            &format!("CategoryRepo::get id={}", category_id),
        )
    }

    async fn list(&self) -> DbResult<Vec<Category>> {
        let client = self.db.get_client().await?;

        let rows = client
            .query("SELECT * FROM categories ORDER BY name", &[])
            .await?;

        rows.iter().map(Category::try_from_row).collect()
    }
}
