use axum::{
    extract::Query,
    Extension, Json,
};
use serde::Serialize;

use crate::auth::Identity;
use crate::config;
use crate::database::{subscription_repository, DatabaseManager};
use crate::database::models::Subscription;
use crate::middleware::{ApiResponse, ApiResult};
use crate::subscriptions::{normalize_create, CreateSubscriptionRequest, ListParams, SubscriptionQuery};

#[derive(Debug, Serialize)]
pub struct ListSubscriptionsResponse {
    pub count: usize,
    pub subscriptions: Vec<Subscription>,
}

/// POST /api/subscriptions - create a subscription for the authenticated user
///
/// The handler only orchestrates: validator first (short-circuits with a
/// field-level 400 before any store call), then a single create against the
/// record store.
pub async fn create_subscription(
    Extension(identity): Extension<Identity>,
    Json(req): Json<CreateSubscriptionRequest>,
) -> ApiResult<Subscription> {
    let entity = normalize_create(&identity, req, &config::config().subscriptions)?;

    let pool = DatabaseManager::pool().await?;
    let created = subscription_repository::create(&pool, &entity).await?;

    tracing::info!(subscription_id = %created.id, user_id = %created.user_id, "subscription created");
    Ok(ApiResponse::created(created))
}

/// GET /api/subscriptions - list the authenticated user's subscriptions
///
/// Filters and sort come from the query descriptor; the owning user id is
/// always part of it, so one user can never read another's records.
pub async fn list_subscriptions(
    Extension(identity): Extension<Identity>,
    Query(params): Query<ListParams>,
) -> ApiResult<ListSubscriptionsResponse> {
    let query = SubscriptionQuery::from_params(&identity, params)?;

    let pool = DatabaseManager::pool().await?;
    let subscriptions = subscription_repository::find(&pool, &query).await?;

    Ok(ApiResponse::success(ListSubscriptionsResponse {
        count: subscriptions.len(),
        subscriptions,
    }))
}
