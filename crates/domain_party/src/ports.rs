//! Agent Domain Ports
//!
//! `ProfileProvider` is how the rest of the system learns who is working
//! the desk. Adapters live in [`crate::adapters`].

use async_trait::async_trait;

use core_kernel::{AgentId, DomainPort, HealthCheckable, PortError};

use crate::agent::AgentProfile;

/// Source of agent profiles
#[async_trait]
pub trait ProfileProvider: DomainPort + HealthCheckable {
    /// Profile of the agent signed in to this desk
    async fn current_agent(&self) -> Result<AgentProfile, PortError>;

    /// Looks up an agent by ID
    ///
    /// # Returns
    ///
    /// The profile if known, or `PortError::NotFound`
    async fn find_agent(&self, agent_id: AgentId) -> Result<AgentProfile, PortError>;
}
