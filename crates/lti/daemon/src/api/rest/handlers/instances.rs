//! Instance diagnostics handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use crate::storage::InstanceRecord;
use axum::{
    extract::{Path, State},
    Json,
};

/// List provisioned instances with their participants
pub async fn list_instances(State(state): State<AppState>) -> ApiResult<Json<Vec<InstanceRecord>>> {
    let instances = state.storage.list_instances().await?;
    Ok(Json(instances))
}

/// Get a specific instance
pub async fn get_instance(
    State(state): State<AppState>,
    Path(id_key): Path<String>,
) -> ApiResult<Json<InstanceRecord>> {
    let record = state
        .storage
        .get_instance(&id_key)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Instance {} not found", id_key)))?;

    Ok(Json(record))
}
