// server/src/db/products.rs

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use delices_core::model::Product;
use delices_core::ports::ProductCatalog;

pub struct PgProductCatalog {
  pool: PgPool,
}

impl PgProductCatalog {
  pub fn new(pool: PgPool) -> Self {
    PgProductCatalog { pool }
  }
}

fn product_from_row(row: &PgRow) -> anyhow::Result<Product> {
  Ok(Product {
    id: row.try_get("id")?,
    name: row.try_get("name")?,
    description: row.try_get("description")?,
    price: row.try_get("price")?,
    image_url: row.try_get("image_url")?,
    category: row.try_get("category")?,
    is_available: row.try_get("is_available")?,
    created_at: row.try_get("created_at")?,
    updated_at: row.try_get("updated_at")?,
  })
}

#[async_trait]
impl ProductCatalog for PgProductCatalog {
  async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
    let rows = sqlx::query(
      "SELECT id, name, description, price, image_url, category, is_available, created_at, updated_at \
       FROM products ORDER BY category ASC, name ASC",
    )
    .fetch_all(&self.pool)
    .await?;
    rows.iter().map(product_from_row).collect()
  }

  async fn find_product(&self, id: Uuid) -> anyhow::Result<Option<Product>> {
    let row = sqlx::query(
      "SELECT id, name, description, price, image_url, category, is_available, created_at, updated_at \
       FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;
    row.as_ref().map(product_from_row).transpose()
  }
}
