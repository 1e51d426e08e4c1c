use axum::{
    middleware,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::subscriptions;
use crate::middleware::auth::jwt_auth_middleware;

/// Bootstrap: env, config singleton, tracing, bind, serve.
pub async fn run() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting SubSentry API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("SUBSENTRY_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("SubSentry API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Assemble the full router: public root + health, protected subscription
/// endpoints behind the bearer-auth middleware. Unauthenticated requests are
/// rejected before any validation runs.
pub fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/api/health", get(health))
        // Protected API
        .merge(subscription_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn subscription_routes() -> Router {
    Router::new()
        .route(
            "/api/subscriptions",
            get(subscriptions::list_subscriptions).post(subscriptions::create_subscription),
        )
        .layer(middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "SubSentry API (Rust)",
            "version": version,
            "description": "Subscription tracking API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/api/health (public)",
                "subscriptions": "GET/POST /api/subscriptions (protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            // Driver detail stays in the logs; this endpoint is public
            tracing::error!(error = %e, "health check failed");
            (
                axum::http::StatusCode::SERVICE_UNAVAILABLE,
                axum::response::Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "database": "unavailable"
                    }
                })),
            )
        }
    }
}
