use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::Subscription;
use crate::subscriptions::query::SubscriptionQuery;
use crate::subscriptions::validate::NewSubscription;

/// Persist a fully-normalized subscription and return the stored row.
///
/// Range and length constraints (amount >= 0, reminder_days 1..30, name and
/// description lengths) are enforced by the store schema; a violation comes
/// back as a database error, never as a partially-written row.
pub async fn create(pool: &PgPool, entity: &NewSubscription) -> Result<Subscription, DatabaseError> {
    let row = sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO subscriptions (
            user_id, name, amount, currency, billing_cycle, next_billing_date,
            category, status, source, description, website,
            reminder_enabled, reminder_days, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(entity.user_id)
    .bind(&entity.name)
    .bind(entity.amount)
    .bind(entity.currency.as_str())
    .bind(entity.billing_cycle.as_str())
    .bind(entity.next_billing_date)
    .bind(entity.category.as_str())
    .bind(entity.status.as_str())
    .bind(entity.source.as_str())
    .bind(entity.description.as_deref())
    .bind(entity.website.as_deref())
    .bind(entity.reminder_enabled)
    .bind(entity.reminder_days)
    .bind(entity.created_at)
    .bind(entity.updated_at)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Fetch the rows matching a query descriptor, ordered by its allow-listed
/// sort key. The owner filter is always present; unknown filter values match
/// nothing and return an empty set.
pub async fn find(pool: &PgPool, query: &SubscriptionQuery) -> Result<Vec<Subscription>, DatabaseError> {
    let mut sql = String::from("SELECT * FROM subscriptions WHERE user_id = $1");
    let mut placeholder = 1;

    if query.status.is_some() {
        placeholder += 1;
        sql.push_str(&format!(" AND status = ${placeholder}"));
    }
    if query.category.is_some() {
        placeholder += 1;
        sql.push_str(&format!(" AND category = ${placeholder}"));
    }
    if query.billing_cycle.is_some() {
        placeholder += 1;
        sql.push_str(&format!(" AND billing_cycle = ${placeholder}"));
    }

    // Safe to interpolate: both parts come from fixed enums, never raw input
    sql.push_str(&format!(
        " ORDER BY {} {}",
        query.sort.column(),
        query.direction.to_sql()
    ));

    let mut q = sqlx::query_as::<_, Subscription>(&sql).bind(query.user_id);
    if let Some(status) = &query.status {
        q = q.bind(status);
    }
    if let Some(category) = &query.category {
        q = q.bind(category);
    }
    if let Some(cycle) = &query.billing_cycle {
        q = q.bind(cycle);
    }

    let rows = q.fetch_all(pool).await?;
    Ok(rows)
}
