// server/src/db/mod.rs

//! PostgreSQL implementations of the core's collaborator ports. All
//! queries use the runtime API with manual row mapping, so the crate
//! builds without a live database. `schema.sql` at the crate root
//! creates the tables and the numbering sequences.

pub mod orders;
pub mod products;
pub mod reservations;

pub use orders::PgOrderStore;
pub use products::PgProductCatalog;
pub use reservations::PgReservationStore;

use sqlx::PgPool;
use tracing::info;

/// Inserts a starter menu when the products table is empty. Only runs
/// when SEED_DB is set; a populated table is left alone.
pub async fn seed_products(pool: &PgPool) -> anyhow::Result<()> {
  let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
    .fetch_one(pool)
    .await?;
  if count > 0 {
    info!(products = count, "products table already populated, skipping seed");
    return Ok(());
  }

  let menu: &[(&str, &str, i64, &str)] = &[
    ("Poulet Braisé", "Poulet mariné grillé, servi avec attiéké", 85_000, "Plats"),
    ("Riz Gras", "Riz au gras à la viande et aux légumes", 60_000, "Plats"),
    ("Sauce Arachide", "Ragoût d'arachide, bœuf et riz blanc", 65_000, "Plats"),
    ("Alloco", "Bananes plantains frites, sauce tomate pimentée", 15_000, "Entrées"),
    ("Salade d'Avocat", "Avocat, tomates et oignons frais", 20_000, "Entrées"),
    ("Jus de Gingembre", "Gingembre frais pressé, citron", 10_000, "Boissons"),
    ("Bissap", "Infusion d'hibiscus glacée", 10_000, "Boissons"),
    ("Thiakry", "Dessert de couscous de mil au lait caillé", 18_000, "Desserts"),
  ];

  for (name, description, price, category) in menu {
    sqlx::query(
      "INSERT INTO products (id, name, description, price, category, is_available, created_at, updated_at) \
       VALUES ($1, $2, $3, $4, $5, TRUE, NOW(), NOW())",
    )
    .bind(uuid::Uuid::new_v4())
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(category)
    .execute(pool)
    .await?;
  }
  info!(products = menu.len(), "seeded starter menu");
  Ok(())
}
