// server/src/db/reservations.rs

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use delices_core::model::{NewReservation, Reservation, ReservationStatus};
use delices_core::ports::ReservationStore;

pub struct PgReservationStore {
  pool: PgPool,
}

impl PgReservationStore {
  pub fn new(pool: PgPool) -> Self {
    PgReservationStore { pool }
  }
}

const RESERVATION_COLUMNS: &str = "id, reservation_number, customer_name, customer_email, \
                                   customer_phone, reservation_date, reservation_time, party_size, \
                                   notes, status, created_at, updated_at";

fn reservation_from_row(row: &PgRow) -> anyhow::Result<Reservation> {
  let status: String = row.try_get("status")?;
  Ok(Reservation {
    id: row.try_get("id")?,
    reservation_number: row.try_get("reservation_number")?,
    customer_name: row.try_get("customer_name")?,
    customer_email: row.try_get("customer_email")?,
    customer_phone: row.try_get("customer_phone")?,
    reservation_date: row.try_get("reservation_date")?,
    reservation_time: row.try_get("reservation_time")?,
    party_size: row.try_get("party_size")?,
    notes: row.try_get("notes")?,
    status: status.parse::<ReservationStatus>()?,
    created_at: row.try_get("created_at")?,
    updated_at: row.try_get("updated_at")?,
  })
}

#[async_trait]
impl ReservationStore for PgReservationStore {
  async fn create_reservation(&self, draft: NewReservation) -> anyhow::Result<Reservation> {
    let mut tx = self.pool.begin().await?;

    let seq: i64 = sqlx::query_scalar("SELECT nextval('reservation_number_seq')")
      .fetch_one(&mut *tx)
      .await?;
    let reservation_number = format!("RES-{:04}", seq);

    let row = sqlx::query(&format!(
      "INSERT INTO reservations (id, reservation_number, customer_name, customer_email, \
       customer_phone, reservation_date, reservation_time, party_size, notes, status, created_at, updated_at) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW()) \
       RETURNING {RESERVATION_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(&reservation_number)
    .bind(&draft.customer_name)
    .bind(&draft.customer_email)
    .bind(&draft.customer_phone)
    .bind(draft.reservation_date)
    .bind(draft.reservation_time)
    .bind(draft.party_size)
    .bind(&draft.notes)
    .bind(ReservationStatus::Pending.as_str())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    let reservation = reservation_from_row(&row)?;
    info!(reservation_number = %reservation.reservation_number, "reservation row created");
    Ok(reservation)
  }

  async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Reservation>> {
    let row = sqlx::query(&format!(
      "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;
    row.as_ref().map(reservation_from_row).transpose()
  }

  async fn list_reservations(&self) -> anyhow::Result<Vec<Reservation>> {
    let rows = sqlx::query(&format!(
      "SELECT {RESERVATION_COLUMNS} FROM reservations \
       ORDER BY reservation_date ASC, reservation_time ASC"
    ))
    .fetch_all(&self.pool)
    .await?;
    rows.iter().map(reservation_from_row).collect()
  }

  async fn update_status(&self, id: Uuid, status: ReservationStatus) -> anyhow::Result<Reservation> {
    let row = sqlx::query(&format!(
      "UPDATE reservations SET status = $2, updated_at = NOW() WHERE id = $1 \
       RETURNING {RESERVATION_COLUMNS}"
    ))
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(&self.pool)
    .await?;
    match row {
      Some(row) => reservation_from_row(&row),
      None => anyhow::bail!("reservation {id} not found"),
    }
  }
}
