use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Returns the health status of the server and database connection.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let (db_status, records) = match state.store.ping().await {
        Ok(()) => match state.store.count().await {
            Ok(count) => ("connected", Some(count)),
            Err(e) => {
                tracing::warn!("Failed to count history records: {:?}", e);
                ("connected", None)
            }
        },
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            ("disconnected", None)
        }
    };

    Json(json!({
        "status": if db_status == "connected" { "healthy" } else { "unhealthy" },
        "database": db_status,
        "records": records,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
