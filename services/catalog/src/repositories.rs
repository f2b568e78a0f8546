//! Repositories for database operations

use anyhow::Result;
use sqlx::SqlitePool;

use crate::models::{Product, ProductFields};

/// Product repository for database operations
#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all products, newest first
    ///
    /// The id tiebreak keeps rows created within the same second in a
    /// stable order.
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as(
            r#"
            SELECT id, name, description, price, image_url, category, created_at
            FROM products
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Find a product by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as(
            r#"
            SELECT id, name, description, price, image_url, category, created_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Insert a new product and return the created row
    pub async fn create(&self, fields: &ProductFields) -> Result<Product> {
        let product = sqlx::query_as(
            r#"
            INSERT INTO products (name, description, price, image_url, category)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, description, price, image_url, category, created_at
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.image_url)
        .bind(&fields.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Overwrite all mutable fields of a product
    ///
    /// Returns false when no row matched the id.
    pub async fn update(&self, id: i64, fields: &ProductFields) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?, description = ?, price = ?, image_url = ?, category = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.image_url)
        .bind(&fields.category)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a product by ID
    ///
    /// Returns false when no row matched the id.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get the distinct non-null categories across all products
    pub async fn distinct_categories(&self) -> Result<Vec<String>> {
        let categories = sqlx::query_scalar(
            r#"
            SELECT DISTINCT category
            FROM products
            WHERE category IS NOT NULL
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::init_schema;
    use common::database::init_memory_pool;

    fn fields(name: &str, price: f64) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            description: None,
            price,
            image_url: "https://via.placeholder.com/300x200?text=Product".to_string(),
            category: "General".to_string(),
        }
    }

    async fn test_repository() -> ProductRepository {
        let pool = init_memory_pool().await.unwrap();
        init_schema(&pool).await.unwrap();
        ProductRepository::new(pool)
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = test_repository().await;

        let created = repo.create(&fields("Mouse", 9.99)).await.unwrap();
        assert_eq!(created.name, "Mouse");
        assert_eq!(created.price, 9.99);

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Mouse");
        assert_eq!(found.price, 9.99);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Mouse");
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = test_repository().await;
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_existing_and_missing() {
        let repo = test_repository().await;
        let created = repo.create(&fields("Keyboard", 30.0)).await.unwrap();

        let mut updated = fields("Mechanical Keyboard", 75.0);
        updated.description = Some("Tactile switches".to_string());
        assert!(repo.update(created.id, &updated).await.unwrap());

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Mechanical Keyboard");
        assert_eq!(found.price, 75.0);
        assert_eq!(found.description.as_deref(), Some("Tactile switches"));

        assert!(!repo.update(9999, &updated).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let repo = test_repository().await;
        let created = repo.create(&fields("Webcam", 99.99)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_distinct_categories_sorted() {
        let repo = test_repository().await;

        let mut a = fields("A", 1.0);
        a.category = "Electronics".to_string();
        let mut b = fields("B", 2.0);
        b.category = "Accessories".to_string();
        let mut c = fields("C", 3.0);
        c.category = "Electronics".to_string();

        repo.create(&a).await.unwrap();
        repo.create(&b).await.unwrap();
        repo.create(&c).await.unwrap();

        let categories = repo.distinct_categories().await.unwrap();
        assert_eq!(categories, vec!["Accessories", "Electronics"]);
    }

    #[tokio::test]
    async fn test_list_all_orders_newest_first() {
        let repo = test_repository().await;

        let first = repo.create(&fields("First", 1.0)).await.unwrap();
        let second = repo.create(&fields("Second", 2.0)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        // Same-second inserts fall back to the id tiebreak
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }
}
