//! Agent profile handler

use axum::{extract::State, Extension, Json};
use chrono::{Timelike, Utc};

use core_kernel::AgentId;
use domain_party::{AgentProfile, DayPeriod};

use crate::auth::TokenClaims;
use crate::dto::profile::ProfileResponse;
use crate::{error::ApiError, AppState};

/// Profile and greeting for the signed-in agent
///
/// A display name in the token wins over the configured profile.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(agent): Extension<TokenClaims>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let configured = state.profiles.current_agent().await?;

    let profile = match agent.name.as_deref() {
        Some(name) => {
            let mut profile = AgentProfile::new(name, configured.role.clone())?;
            if let Ok(id) = agent.sub.parse::<AgentId>() {
                profile.agent_id = id;
            }
            profile
        }
        None => configured,
    };

    let hour = Utc::now().hour();
    Ok(Json(ProfileResponse {
        period: DayPeriod::from_hour(hour),
        greeting: profile.greeting_at(hour),
        agent: profile,
    }))
}
