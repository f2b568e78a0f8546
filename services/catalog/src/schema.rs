//! SQL DDL and startup seeding for the catalog database (SQLite-first)

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Idempotent schema, applied on every startup
///
/// The `users` table is part of the persisted schema but currently unused by
/// any endpoint.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    price REAL NOT NULL,
    image_url TEXT,
    category TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    email TEXT UNIQUE NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Sample catalog shown on a fresh deployment
const SEED_PRODUCTS: &[(&str, &str, f64, &str, &str)] = &[
    (
        "Gaming Laptop",
        "Powerful laptop for gaming",
        1200.00,
        "https://via.placeholder.com/300x200?text=Laptop",
        "Electronics",
    ),
    (
        "Smartphone",
        "Latest model smartphone",
        800.00,
        "https://via.placeholder.com/300x200?text=Smartphone",
        "Electronics",
    ),
    (
        "Headphones",
        "Wireless noise-cancelling headphones",
        150.00,
        "https://via.placeholder.com/300x200?text=Headphones",
        "Accessories",
    ),
    (
        "Programming Book",
        "Complete guide to Rust",
        45.00,
        "https://via.placeholder.com/300x200?text=Book",
        "Books",
    ),
    (
        "Coffee Maker",
        "Premium automatic coffee maker",
        200.00,
        "https://via.placeholder.com/300x200?text=CoffeeMaker",
        "Home",
    ),
];

/// Create the schema if it does not exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::raw_sql(SQLITE_INIT).execute(pool).await?;
    Ok(())
}

/// Insert the sample products, but only into an empty table
pub async fn seed_products(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        info!("Database already contains {} products", count);
        return Ok(());
    }

    info!("Seeding sample products");

    for &(name, description, price, image_url, category) in SEED_PRODUCTS {
        sqlx::query(
            r#"
            INSERT INTO products (name, description, price, image_url, category)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(image_url)
        .bind(category)
        .execute(pool)
        .await?;
    }

    info!("Sample products inserted");

    Ok(())
}
