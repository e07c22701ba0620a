use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Deserialize;

use summit::data::{RegisterResponse, RegistrationsResponse};
use summit::errors::StoreError;
use summit::id::RegistrationId;
use summit::log;
use summit::serde_json::Value;

use crate::handlers::ApiError;
use crate::serialize;

/// Collection registrations are stored in.
pub const COLLECTION: &str = "registration";

/// Page size when the caller gives no `limit`.
pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

/// Handler to register an attendee
pub async fn register(
    State(state): State<Arc<crate::AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(raw) = payload?;

    let registration = summit::validate::registration(&raw).inspect_err(|err| {
        log::debug!("Rejected registration: {}", err);
    })?;
    let document = registration
        .to_document()
        .map_err(|e| StoreError::Write(e.to_string()))?;

    let id: RegistrationId = state.store.insert(COLLECTION, document).await?.into();
    log::info!("Registration {} stored", id);

    Ok(Json(RegisterResponse { ok: true, id }))
}

/// Handler to list stored registrations, oldest first
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<RegistrationsResponse>, ApiError> {
    let Query(params) = params?;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let documents = state.store.find(COLLECTION, limit).await?;
    log::debug!("Read {} registrations (limit {})", documents.len(), limit);

    Ok(Json(RegistrationsResponse {
        ok: true,
        items: documents.into_iter().map(serialize::document).collect(),
    }))
}
