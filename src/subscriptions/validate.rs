use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::{AuthError, Identity};
use crate::config::SubscriptionConfig;
use crate::subscriptions::error::{CreateError, ValidationError};
use crate::subscriptions::types::{BillingCycle, Category, Currency, Source, SubscriptionStatus};

/// Raw create payload. Every field is optional so presence is a validation
/// decision (with an exact missing-field list), not a serde rejection.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub billing_cycle: Option<String>,
    pub next_billing_date: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub reminder_enabled: Option<bool>,
    pub reminder_days: Option<i32>,
}

/// `reminderEnabled` defaults to true unless a strict boolean was supplied.
/// A non-boolean value must therefore not sink the whole request at the serde
/// layer; it reads as "not supplied" and takes the default downstream.
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

/// Fully normalized entity, ready for the record store. Timestamps are set
/// here (normalize-before-persist) rather than by a save hook on the row.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub user_id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: DateTime<Utc>,
    pub category: Category,
    pub status: SubscriptionStatus,
    pub source: Source,
    pub description: Option<String>,
    pub website: Option<String>,
    pub reminder_enabled: bool,
    pub reminder_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validate and normalize a create payload for an authenticated identity.
///
/// Rules run strictly in order and the first failure wins:
/// presence -> amount range -> billing cycle -> date parse -> identity
/// re-check -> defaulting. An explicit `reminderDays` is always preserved,
/// including 0; the store constraint rejects out-of-range values.
pub fn normalize_create(
    identity: &Identity,
    req: CreateSubscriptionRequest,
    config: &SubscriptionConfig,
) -> Result<NewSubscription, CreateError> {
    // 1. Required fields, reported as the exact missing set.
    let mut missing: Vec<&'static str> = Vec::new();
    if !is_present(&req.name) {
        missing.push("name");
    }
    if req.amount.is_none() {
        missing.push("amount");
    }
    if !is_present(&req.billing_cycle) {
        missing.push("billingCycle");
    }
    if !is_present(&req.next_billing_date) {
        missing.push("nextBillingDate");
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequiredFields(missing).into());
    }

    let name = req.name.unwrap_or_default();
    let amount = req.amount.unwrap_or_default();
    let raw_cycle = req.billing_cycle.unwrap_or_default();
    let raw_date = req.next_billing_date.unwrap_or_default();

    // 2. Amount range. Zero is a valid amount.
    if amount < Decimal::ZERO {
        return Err(ValidationError::InvalidAmount.into());
    }

    // 3. Billing cycle, case-normalized to the fixed set.
    let billing_cycle: BillingCycle = raw_cycle
        .parse()
        .map_err(|_| ValidationError::InvalidBillingCycle)?;

    // 4. Next billing date must parse to a valid instant.
    let next_billing_date = parse_next_billing_date(&raw_date)
        .ok_or_else(|| ValidationError::InvalidDate(raw_date.clone()))?;

    // 5. Identity re-check. The authenticator already guarantees this, but a
    //    nil id must never reach the store.
    if identity.id.is_nil() {
        return Err(AuthError::MissingIdentity.into());
    }

    // 6. Defaulting for the optional fixed-set fields.
    let currency = parse_or_default(req.currency, "currency", Currency::ALLOWED, config.default_currency)?;
    let category = parse_or_default(req.category, "category", Category::ALLOWED, Category::Other)?;
    let status = parse_or_default(req.status, "status", SubscriptionStatus::ALLOWED, SubscriptionStatus::Active)?;
    let source = parse_or_default(req.source, "source", Source::ALLOWED, Source::Manual)?;

    let reminder_enabled = req.reminder_enabled.unwrap_or(true);
    let reminder_days = req.reminder_days.unwrap_or(3);

    // 7. Normalize before persist.
    let now = Utc::now();

    Ok(NewSubscription {
        user_id: identity.id,
        name: name.trim().to_string(),
        amount,
        currency,
        billing_cycle,
        next_billing_date,
        category,
        status,
        source,
        description: req.description,
        website: req.website.map(|w| w.trim().to_string()),
        reminder_enabled,
        reminder_days,
        created_at: now,
        updated_at: now,
    })
}

fn is_present(field: &Option<String>) -> bool {
    matches!(field, Some(s) if !s.trim().is_empty())
}

fn parse_or_default<T: std::str::FromStr>(
    raw: Option<String>,
    field: &'static str,
    allowed: &'static [&'static str],
    default: T,
) -> Result<T, ValidationError> {
    match raw {
        Some(s) => s
            .parse()
            .map_err(|_| ValidationError::InvalidFieldValue { field, allowed }),
        None => Ok(default),
    }
}

/// Accepts RFC 3339, a naive datetime, or a plain date (read as midnight UTC).
fn parse_next_billing_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}
