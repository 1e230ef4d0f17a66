//! Configuration-backed profile provider

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use core_kernel::{AdapterHealth, AgentId, DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::agent::AgentProfile;
use crate::error::PartyError;
use crate::ports::ProfileProvider;

/// Serves one fixed profile, replaceable at runtime
#[derive(Debug, Clone)]
pub struct StaticProfileProvider {
    profile: Arc<RwLock<AgentProfile>>,
}

impl StaticProfileProvider {
    pub fn new(profile: AgentProfile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(profile)),
        }
    }

    /// Builds the profile from configured name and role
    pub fn from_config(display_name: &str, role: &str) -> Result<Self, PartyError> {
        AgentProfile::new(display_name, role).map(Self::new)
    }

    /// Swaps in a new profile, returning the previous one
    pub async fn replace(&self, profile: AgentProfile) -> AgentProfile {
        std::mem::replace(&mut *self.profile.write().await, profile)
    }
}

impl DomainPort for StaticProfileProvider {}

#[async_trait]
impl HealthCheckable for StaticProfileProvider {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "static-profile-provider".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ProfileProvider for StaticProfileProvider {
    async fn current_agent(&self) -> Result<AgentProfile, PortError> {
        Ok(self.profile.read().await.clone())
    }

    async fn find_agent(&self, agent_id: AgentId) -> Result<AgentProfile, PortError> {
        let profile = self.profile.read().await;
        if profile.agent_id == agent_id {
            Ok(profile.clone())
        } else {
            Err(PartyError::not_found(agent_id).into())
        }
    }
}
