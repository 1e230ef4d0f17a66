//! Claims handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use tracing::info;
use validator::Validate;

use core_kernel::ClaimReference;
use domain_claims::{Claim, ClaimFilter, ClaimPatch, ClaimSummary};

use crate::auth::{permissions, require, TokenClaims};
use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Lists claims, optionally filtered
pub async fn list_claims(
    State(state): State<AppState>,
    Extension(agent): Extension<TokenClaims>,
    Query(filter): Query<ClaimFilter>,
) -> Result<Json<ClaimListResponse>, ApiError> {
    require(&agent, permissions::CLAIM_READ)?;

    let store = state.store.read().await;
    let claims = store.filter(&filter).into_iter().cloned().collect();
    Ok(Json(ClaimListResponse::new(claims)))
}

/// Dashboard overview counts
pub async fn claim_summary(
    State(state): State<AppState>,
    Extension(agent): Extension<TokenClaims>,
) -> Result<Json<ClaimSummary>, ApiError> {
    require(&agent, permissions::CLAIM_READ)?;

    let summary = state.store.read().await.summary();
    Ok(Json(summary))
}

/// Gets a claim by reference number
pub async fn get_claim(
    State(state): State<AppState>,
    Extension(agent): Extension<TokenClaims>,
    Path(reference): Path<String>,
) -> Result<Json<Claim>, ApiError> {
    require(&agent, permissions::CLAIM_READ)?;
    let reference: ClaimReference = reference.parse()?;

    let store = state.store.read().await;
    store
        .get_claim(&reference)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Claim {reference}")))
}

/// Merges a partial update into a claim
pub async fn update_claim(
    State(state): State<AppState>,
    Extension(agent): Extension<TokenClaims>,
    Path(reference): Path<String>,
    Json(request): Json<UpdateClaimRequest>,
) -> Result<Json<Claim>, ApiError> {
    require(&agent, permissions::CLAIM_WRITE)?;
    let reference: ClaimReference = reference.parse()?;
    request.validate()?;

    let patch = ClaimPatch::from(request);
    if patch.is_empty() {
        return Err(ApiError::BadRequest("Update contains no fields".to_string()));
    }

    let mut store = state.store.write().await;
    if !store.update_claim(&reference, patch) {
        return Err(ApiError::NotFound(format!("Claim {reference}")));
    }
    info!(reference_number = %reference, agent = %agent.sub, "Claim updated");

    store
        .get_claim(&reference)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::Internal(format!("Claim {reference} vanished after update")))
}

/// Removes every claim with the reference number
pub async fn delete_claim(
    State(state): State<AppState>,
    Extension(agent): Extension<TokenClaims>,
    Path(reference): Path<String>,
) -> Result<Json<DeleteClaimResponse>, ApiError> {
    require(&agent, permissions::CLAIM_WRITE)?;
    let reference: ClaimReference = reference.parse()?;

    let removed = state.store.write().await.delete_claim(&reference);
    info!(reference_number = %reference, agent = %agent.sub, removed, "Claim deleted");

    Ok(Json(DeleteClaimResponse {
        reference_number: reference,
        removed,
    }))
}
