// core/src/model/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Catalog entry, owned by the catalog collaborator and read-only to the
/// cart/checkout core. Prices are whole Guinean francs; GNF has no minor
/// unit.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub price: i64,
  pub image_url: Option<String>,
  pub category: String,
  pub is_available: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
