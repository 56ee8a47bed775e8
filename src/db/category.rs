use color_eyre::Result;

use super::models::Category;
use super::Db;

impl Db {
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories ORDER BY id"#)
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    pub async fn category(&self, category_id: i64) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories WHERE id = ?"#)
                .bind(category_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }
}
