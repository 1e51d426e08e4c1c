use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted subscription record. Columns are snake_case; the wire format
/// keeps the legacy camelCase field names. Fixed-set fields are stored as
/// their canonical strings (the store enforces membership with CHECK
/// constraints, see schema.sql).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
    pub billing_cycle: String,
    pub next_billing_date: DateTime<Utc>,
    pub category: String,
    pub status: String,
    pub source: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub reminder_enabled: bool,
    pub reminder_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
