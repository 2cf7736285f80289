use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of `payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PaymentModel {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub payer_id: i32,
    pub description: Option<String>,
    pub payment_date: DateTime<Utc>,
    pub payment: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A payment joined with its category and payer names for list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PaymentListModel {
    pub id: i32,
    pub category_name: Option<String>,
    pub payer_name: Option<String>,
    pub payment_date: DateTime<Utc>,
    pub payment: i32,
    pub created_at: DateTime<Utc>,
}

/// Validated payment values on their way to storage. `id` is zero for a
/// payment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub payer_id: i32,
    pub description: Option<String>,
    pub payment_date: DateTime<Utc>,
    pub payment: i32,
}

/// Result of an owner-checked delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    NotOwner,
}
