//! Claim submission handler

use axum::{extract::State, http::StatusCode, Extension, Json};
use tracing::{info, warn};
use validator::Validate;

use domain_claims::{ClaimProcessor, ProcessorConfig};

use crate::auth::{permissions, require, TokenClaims};
use crate::dto::submissions::{SubmissionResponse, SubmitClaimRequest};
use crate::{error::ApiError, AppState};

/// Runs a completed form through the processor and tracks the result
///
/// Each request gets its own processor, so concurrent submissions never
/// block one another.
pub async fn submit_claim(
    State(state): State<AppState>,
    Extension(agent): Extension<TokenClaims>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    require(&agent, permissions::CLAIM_SUBMIT)?;
    request.validate()?;

    let processor = ClaimProcessor::with_entropy(
        ProcessorConfig {
            decision_delay: state.config.decision_delay(),
        },
        state.entropy.clone(),
    );
    request.fill(&processor);

    let outcome = processor.submit().await?;

    {
        let mut store = state.store.write().await;
        if store.contains(&outcome.claim.reference_number) {
            warn!(
                reference_number = %outcome.claim.reference_number,
                "Generated reference already tracked"
            );
        }
        store.add_claim(outcome.claim.clone());
    }

    info!(
        reference_number = %outcome.decision.reference_number,
        approved = outcome.decision.approved,
        agent = %agent.sub,
        "Claim submitted"
    );

    Ok((StatusCode::CREATED, Json(outcome.into())))
}
