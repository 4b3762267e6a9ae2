use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DELETE_ALL_FLAG, ERR_INVALID_ID, ERR_INVALID_USER_ID, MSG_DELETED, MSG_INSERTED,
};
use crate::error::{AppError, Result};
use crate::models::{HistoryEntry, NewHistoryRecord};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CreateHistoryResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListHistoryParams {
    pub user_id: Option<String>,
}

/// Query parameters are kept as raw strings so that each delete mode can
/// report its own error instead of a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteHistoryParams {
    pub id: Option<String>,
    pub all: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteHistoryResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Record one cipher operation
///
/// POST /api/history
///
/// The body is parsed as JSON whatever its `Content-Type`. Bodies that are
/// not valid JSON, miss a required field, or name an unknown operation are
/// rejected with 400 before reaching storage.
pub async fn create_history(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<CreateHistoryResponse>> {
    let body = body.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
    let record: NewHistoryRecord = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidInput(format!("Invalid request body: {}", e)))?;

    let id = state.store.insert(&record).await?;

    Ok(Json(CreateHistoryResponse {
        message: MSG_INSERTED.to_string(),
        id,
    }))
}

/// List history, newest first
///
/// GET /api/history[?user_id=N]
///
/// Without `user_id` every user's records are returned.
pub async fn list_history(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListHistoryParams>, QueryRejection>,
) -> Result<Json<Vec<HistoryEntry>>> {
    let Query(params) = params.map_err(query_error)?;
    let records = match params.user_id.as_deref() {
        Some(raw) => {
            let user_id = parse_integer(raw)
                .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_USER_ID.to_string()))?;
            state.store.list_for_user(user_id).await?
        }
        None => state.store.list_all().await?,
    };

    Ok(Json(records.into_iter().map(HistoryEntry::from).collect()))
}

/// Delete one record or all records of a user
///
/// DELETE /api/history?id=N
/// DELETE /api/history?all=true&user_id=N
pub async fn delete_history(
    State(state): State<AppState>,
    params: std::result::Result<Query<DeleteHistoryParams>, QueryRejection>,
) -> Result<Json<DeleteHistoryResponse>> {
    let Query(params) = params.map_err(query_error)?;
    if let Some(raw_id) = params.id.as_deref() {
        let id = parse_integer(raw_id)
            .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_ID.to_string()))?;

        if state.store.delete_one(id).await? == 0 {
            return Err(AppError::NotFound);
        }

        return Ok(Json(DeleteHistoryResponse {
            message: MSG_DELETED.to_string(),
            id: Some(id),
        }));
    }

    if params.all.as_deref() == Some(DELETE_ALL_FLAG) {
        // Zero is treated the same as a missing id
        let user_id = params
            .user_id
            .as_deref()
            .and_then(parse_integer)
            .filter(|id| *id != 0)
            .ok_or(AppError::MissingUserId)?;

        let removed = state.store.delete_by_user(user_id).await?;

        return Ok(Json(DeleteHistoryResponse {
            message: format!("Deleted {} rows", removed),
            id: None,
        }));
    }

    Err(AppError::NothingToDelete)
}

fn query_error(rejection: QueryRejection) -> AppError {
    AppError::InvalidInput(rejection.body_text())
}

/// Parse an integer id, also accepting integral decimal forms such as `"1.0"`
fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }

    let value = raw.parse::<f64>().ok()?;
    // i64::MAX is not exactly representable, so the upper bound is exclusive
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as i64)
    } else {
        None
    }
}
