// server/src/db/orders.rs

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use delices_core::model::{NewOrder, Order, OrderItem, OrderStatus, OrderType, PaymentMethod};
use delices_core::ports::OrderStore;

pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    PgOrderStore { pool }
  }
}

const ORDER_COLUMNS: &str = "id, order_number, customer_name, customer_phone, customer_address, \
                             order_type, payment_method, items, subtotal, total, status, notes, \
                             user_id, created_at, updated_at";

fn order_from_row(row: &PgRow) -> anyhow::Result<Order> {
  let order_type: String = row.try_get("order_type")?;
  let payment_method: String = row.try_get("payment_method")?;
  let status: String = row.try_get("status")?;
  // Items come back as the JSONB array they were stored as.
  let items_json: serde_json::Value = row.try_get("items")?;
  let items: Vec<OrderItem> = serde_json::from_value(items_json)?;

  Ok(Order {
    id: row.try_get("id")?,
    order_number: row.try_get("order_number")?,
    customer_name: row.try_get("customer_name")?,
    customer_phone: row.try_get("customer_phone")?,
    customer_address: row.try_get("customer_address")?,
    order_type: order_type.parse::<OrderType>()?,
    payment_method: payment_method.parse::<PaymentMethod>()?,
    items,
    subtotal: row.try_get("subtotal")?,
    total: row.try_get("total")?,
    status: status.parse::<OrderStatus>()?,
    notes: row.try_get("notes")?,
    user_id: row.try_get("user_id")?,
    created_at: row.try_get("created_at")?,
    updated_at: row.try_get("updated_at")?,
  })
}

#[async_trait]
impl OrderStore for PgOrderStore {
  /// Inserts the draft and assigns its number from `order_number_seq`
  /// inside the same transaction. Clients never supply a number.
  async fn create_order(&self, draft: NewOrder) -> anyhow::Result<Order> {
    let mut tx = self.pool.begin().await?;

    let seq: i64 = sqlx::query_scalar("SELECT nextval('order_number_seq')")
      .fetch_one(&mut *tx)
      .await?;
    let order_number = format!("ORD-{:04}", seq);

    let row = sqlx::query(&format!(
      "INSERT INTO orders (id, order_number, customer_name, customer_phone, customer_address, \
       order_type, payment_method, items, subtotal, total, status, notes, user_id, created_at, updated_at) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW(), NOW()) \
       RETURNING {ORDER_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(&order_number)
    .bind(&draft.customer_name)
    .bind(&draft.customer_phone)
    .bind(&draft.customer_address)
    .bind(draft.order_type.as_str())
    .bind(draft.payment_method.as_str())
    .bind(serde_json::to_value(&draft.items)?)
    .bind(draft.subtotal)
    .bind(draft.total)
    .bind(OrderStatus::Pending.as_str())
    .bind(&draft.notes)
    .bind(draft.user_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    let order = order_from_row(&row)?;
    info!(order_number = %order.order_number, "order row created");
    Ok(order)
  }

  async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Order>> {
    let row = sqlx::query(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    row.as_ref().map(order_from_row).transpose()
  }

  async fn find_by_number(&self, order_number: &str) -> anyhow::Result<Option<Order>> {
    let row = sqlx::query(&format!(
      "SELECT {ORDER_COLUMNS} FROM orders WHERE order_number = $1"
    ))
    .bind(order_number)
    .fetch_optional(&self.pool)
    .await?;
    row.as_ref().map(order_from_row).transpose()
  }

  async fn list_orders(&self) -> anyhow::Result<Vec<Order>> {
    let rows = sqlx::query(&format!(
      "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
    ))
    .fetch_all(&self.pool)
    .await?;
    rows.iter().map(order_from_row).collect()
  }

  async fn update_status(&self, id: Uuid, status: OrderStatus) -> anyhow::Result<Order> {
    let row = sqlx::query(&format!(
      "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {ORDER_COLUMNS}"
    ))
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(&self.pool)
    .await?;
    match row {
      Some(row) => order_from_row(&row),
      None => anyhow::bail!("order {id} not found"),
    }
  }
}
