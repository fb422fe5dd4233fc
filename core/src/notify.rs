// core/src/notify.rs

//! Turns persisted orders and reservations into the kitchen's French
//! notification emails and hands them to the mail provider. Dispatch is
//! best-effort end to end: the submission flows log failures and move on.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::info;

use crate::model::{Order, OrderType, PaymentMethod, Reservation};
use crate::ports::{Mailer, Notifier};

/// What a notification is about; used for the subject line and the log
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
  KitchenOrder,
  Reservation,
}

impl NotificationKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      NotificationKind::KitchenOrder => "kitchen_order",
      NotificationKind::Reservation => "reservation",
    }
  }
}

/// A rendered email ready for the provider.
#[derive(Debug, Clone)]
pub struct EmailMessage {
  pub to: String,
  pub subject: String,
  pub html: String,
}

/// Formats order/reservation snapshots and submits them with a fixed
/// recipient. One instance serves the whole process.
pub struct Dispatcher {
  mailer: Arc<dyn Mailer>,
  kitchen_address: String,
}

impl Dispatcher {
  pub fn new(mailer: Arc<dyn Mailer>, kitchen_address: impl Into<String>) -> Self {
    Dispatcher {
      mailer,
      kitchen_address: kitchen_address.into(),
    }
  }
}

#[async_trait]
impl Notifier for Dispatcher {
  async fn order_placed(&self, order: &Order) -> anyhow::Result<()> {
    let message = EmailMessage {
      to: self.kitchen_address.clone(),
      subject: format!(
        "🔔 Nouvelle commande {} - {}",
        order.order_number,
        order_type_label(order.order_type)
      ),
      html: render_kitchen_order(order),
    };
    self.mailer.send(&message).await?;
    info!(
      kind = NotificationKind::KitchenOrder.as_str(),
      order_number = %order.order_number,
      "kitchen notified"
    );
    Ok(())
  }

  async fn reservation_booked(&self, reservation: &Reservation) -> anyhow::Result<()> {
    let message = EmailMessage {
      to: self.kitchen_address.clone(),
      subject: format!(
        "🍽️ Nouvelle réservation {} - {} personnes",
        reservation.reservation_number, reservation.party_size
      ),
      html: render_reservation(reservation),
    };
    self.mailer.send(&message).await?;
    info!(
      kind = NotificationKind::Reservation.as_str(),
      reservation_number = %reservation.reservation_number,
      "restaurant notified"
    );
    Ok(())
  }
}

pub fn order_type_label(order_type: OrderType) -> &'static str {
  match order_type {
    OrderType::Delivery => "🚚 Livraison",
    OrderType::Pickup => "🏪 À emporter",
  }
}

pub fn payment_label(method: PaymentMethod) -> &'static str {
  match method {
    PaymentMethod::Cash => "💵 Espèces",
    PaymentMethod::MobileMoney => "📱 Mobile Money",
    PaymentMethod::Card => "💳 Carte bancaire",
  }
}

/// Whole Guinean francs with thousands grouping: `50 000 GNF`.
pub fn format_gnf(amount: i64) -> String {
  let negative = amount < 0;
  let digits = amount.unsigned_abs().to_string();
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(' ');
    }
    grouped.push(ch);
  }
  if negative {
    format!("-{} GNF", grouped)
  } else {
    format!("{} GNF", grouped)
  }
}

/// `dd/mm/yyyy hh:mm`, the timestamp style of the kitchen email.
pub fn format_datetime(at: DateTime<Utc>) -> String {
  at.format("%d/%m/%Y %H:%M").to_string()
}

const FRENCH_WEEKDAYS: [&str; 7] = [
  "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];
const FRENCH_MONTHS: [&str; 12] = [
  "janvier",
  "février",
  "mars",
  "avril",
  "mai",
  "juin",
  "juillet",
  "août",
  "septembre",
  "octobre",
  "novembre",
  "décembre",
];

/// Long French date for reservation emails: `vendredi 14 août 2026`.
pub fn format_french_date(date: NaiveDate) -> String {
  let weekday = FRENCH_WEEKDAYS[date.weekday().num_days_from_monday() as usize];
  let month = FRENCH_MONTHS[date.month0() as usize];
  format!("{} {:02} {} {}", weekday, date.day(), month, date.year())
}

/// Customer input lands inside the HTML body; escape it.
fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

/// The kitchen's new-order email: header with the order number, date
/// box, customer block, type/payment badges, the line-item table and the
/// total banner, plus the customer's notes when present.
pub fn render_kitchen_order(order: &Order) -> String {
  let mut items_html = String::new();
  for item in &order.items {
    items_html.push_str(&format!(
      "<tr>\
       <td style=\"padding: 12px; border-bottom: 1px solid #e5e7eb; text-align: left;\">{}</td>\
       <td style=\"padding: 12px; border-bottom: 1px solid #e5e7eb; text-align: center; font-weight: bold;\">{}</td>\
       <td style=\"padding: 12px; border-bottom: 1px solid #e5e7eb; text-align: right;\">{}</td>\
       <td style=\"padding: 12px; border-bottom: 1px solid #e5e7eb; text-align: right; font-weight: bold;\">{}</td>\
       </tr>",
      escape_html(&item.name),
      item.quantity,
      format_gnf(item.price),
      format_gnf(item.line_total()),
    ));
  }

  let address_html = match &order.customer_address {
    Some(address) => format!(
      "<p style=\"margin: 4px 0;\"><strong>Adresse:</strong> {}</p>",
      escape_html(address)
    ),
    None => String::new(),
  };
  let notes_html = match &order.notes {
    Some(notes) => format!(
      "<div style=\"margin-top: 24px; background-color: #fef3c7; border-radius: 8px; padding: 16px;\">\
       <h3 style=\"margin: 0 0 8px 0; font-size: 16px; color: #92400e;\">📝 Notes du client</h3>\
       <p style=\"margin: 0; color: #78350f;\">{}</p></div>",
      escape_html(notes)
    ),
    None => String::new(),
  };

  format!(
    "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head>\
     <body style=\"font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 20px; background-color: #f3f4f6;\">\
     <div style=\"max-width: 600px; margin: 0 auto; background-color: white; border-radius: 12px; overflow: hidden;\">\
     <div style=\"background-color: #dc2626; color: white; padding: 24px; text-align: center;\">\
     <h1 style=\"margin: 0; font-size: 24px;\">🔔 NOUVELLE COMMANDE</h1>\
     <p style=\"margin: 8px 0 0 0; font-size: 28px; font-weight: bold;\">{number}</p></div>\
     <div style=\"padding: 24px;\">\
     <div style=\"background-color: #fef3c7; border-radius: 8px; padding: 16px; margin-bottom: 24px;\">\
     <p style=\"margin: 0; font-size: 14px; color: #92400e;\"><strong>📅 Date:</strong> {date}</p></div>\
     <div style=\"background-color: #f9fafb; border-radius: 8px; padding: 16px; margin-bottom: 24px;\">\
     <h2 style=\"margin: 0 0 12px 0; font-size: 18px; color: #374151;\">👤 Client</h2>\
     <p style=\"margin: 4px 0;\"><strong>Nom:</strong> {name}</p>\
     <p style=\"margin: 4px 0;\"><strong>Téléphone:</strong> {phone}</p>\
     {address}</div>\
     <div style=\"margin-bottom: 24px;\">\
     <span style=\"background-color: #dbeafe; color: #1e40af; padding: 8px 16px; border-radius: 20px; font-size: 14px;\">{order_type}</span> \
     <span style=\"background-color: #dcfce7; color: #166534; padding: 8px 16px; border-radius: 20px; font-size: 14px;\">{payment}</span></div>\
     <h2 style=\"margin: 0 0 12px 0; font-size: 18px; color: #374151;\">📦 Articles commandés</h2>\
     <table style=\"width: 100%; border-collapse: collapse; margin-bottom: 24px;\">\
     <thead><tr style=\"background-color: #f3f4f6;\">\
     <th style=\"padding: 12px; text-align: left;\">Article</th>\
     <th style=\"padding: 12px; text-align: center;\">Qté</th>\
     <th style=\"padding: 12px; text-align: right;\">Prix</th>\
     <th style=\"padding: 12px; text-align: right;\">Total</th></tr></thead>\
     <tbody>{items}</tbody></table>\
     <div style=\"background-color: #dc2626; color: white; border-radius: 8px; padding: 20px; text-align: center;\">\
     <p style=\"margin: 0; font-size: 16px;\">TOTAL À PAYER</p>\
     <p style=\"margin: 8px 0 0 0; font-size: 32px; font-weight: bold;\">{total}</p></div>\
     {notes}</div>\
     <div style=\"background-color: #f9fafb; padding: 16px; text-align: center; border-top: 1px solid #e5e7eb;\">\
     <p style=\"margin: 0; font-size: 14px; color: #6b7280;\">Délices Restaurant - Système de commande en ligne</p></div>\
     </div></body></html>",
    number = escape_html(&order.order_number),
    date = format_datetime(order.created_at),
    name = escape_html(&order.customer_name),
    phone = escape_html(&order.customer_phone),
    address = address_html,
    order_type = order_type_label(order.order_type),
    payment = payment_label(order.payment_method),
    items = items_html,
    total = format_gnf(order.total),
    notes = notes_html,
  )
}

/// The reservation email: date/time banner, customer block and the party
/// size panel.
pub fn render_reservation(reservation: &Reservation) -> String {
  let phone_html = match &reservation.customer_phone {
    Some(phone) => format!(
      "<p style=\"margin: 4px 0;\"><strong>Téléphone:</strong> {}</p>",
      escape_html(phone)
    ),
    None => String::new(),
  };
  let notes_html = match &reservation.notes {
    Some(notes) => format!(
      "<div style=\"margin-top: 24px; background-color: #fef3c7; border-radius: 8px; padding: 16px;\">\
       <h3 style=\"margin: 0 0 8px 0; font-size: 16px; color: #92400e;\">📝 Notes du client</h3>\
       <p style=\"margin: 0; color: #78350f;\">{}</p></div>",
      escape_html(notes)
    ),
    None => String::new(),
  };

  format!(
    "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head>\
     <body style=\"font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 20px; background-color: #f3f4f6;\">\
     <div style=\"max-width: 600px; margin: 0 auto; background-color: white; border-radius: 12px; overflow: hidden;\">\
     <div style=\"background-color: #059669; color: white; padding: 24px; text-align: center;\">\
     <h1 style=\"margin: 0; font-size: 24px;\">🍽️ NOUVELLE RÉSERVATION</h1>\
     <p style=\"margin: 8px 0 0 0; font-size: 28px; font-weight: bold;\">{number}</p></div>\
     <div style=\"padding: 24px;\">\
     <div style=\"background-color: #ecfdf5; border-radius: 8px; padding: 16px; margin-bottom: 24px;\">\
     <p style=\"margin: 0; font-size: 18px; color: #065f46; font-weight: bold;\">📅 {date} à {time}</p></div>\
     <div style=\"background-color: #f9fafb; border-radius: 8px; padding: 16px; margin-bottom: 24px;\">\
     <h2 style=\"margin: 0 0 12px 0; font-size: 18px; color: #374151;\">👤 Client</h2>\
     <p style=\"margin: 4px 0;\"><strong>Nom:</strong> {name}</p>\
     <p style=\"margin: 4px 0;\"><strong>Email:</strong> {email}</p>\
     {phone}</div>\
     <div style=\"background-color: #059669; color: white; border-radius: 8px; padding: 20px; text-align: center;\">\
     <p style=\"margin: 0; font-size: 16px;\">NOMBRE DE PERSONNES</p>\
     <p style=\"margin: 8px 0 0 0; font-size: 48px; font-weight: bold;\">{party}</p></div>\
     {notes}</div>\
     <div style=\"background-color: #f9fafb; padding: 16px; text-align: center; border-top: 1px solid #e5e7eb;\">\
     <p style=\"margin: 0; font-size: 14px; color: #6b7280;\">Délices Restaurant - Système de réservation en ligne</p></div>\
     </div></body></html>",
    number = escape_html(&reservation.reservation_number),
    date = format_french_date(reservation.reservation_date),
    time = reservation.reservation_time.format("%H:%M"),
    name = escape_html(&reservation.customer_name),
    email = escape_html(&reservation.customer_email),
    phone = phone_html,
    party = reservation.party_size,
    notes = notes_html,
  )
}
