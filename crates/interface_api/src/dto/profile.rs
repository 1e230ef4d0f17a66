//! Agent profile DTOs

use serde::{Deserialize, Serialize};

use domain_party::{AgentProfile, DayPeriod};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub agent: AgentProfile,
    pub period: DayPeriod,
    pub greeting: String,
}
