use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use spabook_core::{
    errors::BookingError,
    models::spa::{CreateSpaRequest, CreateSpaResponse, GetSpaResponse, ListSpasResponse},
};
use spabook_db::models::DbSpa;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Loads a spa through the detail cache, hitting the database only on a
/// miss. Entries stay cached until the cache is cleared.
pub(crate) async fn load_spa(state: &ApiState, id: Uuid) -> Result<DbSpa, AppError> {
    if let Some(spa) = state.spa_cache.read().await.get(&id) {
        return Ok(spa.clone());
    }

    let spa = spabook_db::repositories::spa::get_spa_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Storage)?
        .ok_or_else(|| BookingError::NotFound(format!("Spa with ID {} not found", id)))?;

    state.spa_cache.write().await.insert(id, spa.clone());
    Ok(spa)
}

#[axum::debug_handler]
pub async fn create_spa(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSpaRequest>,
) -> Result<Json<CreateSpaResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Spa name must not be empty".to_string(),
        )));
    }

    let db_spa = spabook_db::repositories::spa::create_spa(
        &state.db_pool,
        &payload.name,
        &payload.address,
    )
    .await
    .map_err(BookingError::Storage)?;

    state.spa_cache.write().await.insert(db_spa.id, db_spa.clone());

    let response = CreateSpaResponse {
        id: db_spa.id,
        name: db_spa.name,
        address: db_spa.address,
        created_at: db_spa.created_at,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_spa(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetSpaResponse>, AppError> {
    let spa = load_spa(&state, id).await?;

    let response = GetSpaResponse {
        id: spa.id,
        name: spa.name,
        address: spa.address,
        created_at: spa.created_at,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn list_spas(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListSpasResponse>, AppError> {
    let spas = spabook_db::repositories::spa::list_spas(&state.db_pool)
        .await
        .map_err(BookingError::Storage)?;

    let response = ListSpasResponse {
        spas: spas
            .into_iter()
            .map(|spa| GetSpaResponse {
                id: spa.id,
                name: spa.name,
                address: spa.address,
                created_at: spa.created_at,
            })
            .collect(),
    };

    Ok(Json(response))
}
