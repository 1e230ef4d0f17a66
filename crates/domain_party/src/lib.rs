//! Agent Domain
//!
//! This crate describes the agent working the claims desk: who they are,
//! what they handle, and how the dashboard greets them.
//!
//! Profiles are obtained through the `ProfileProvider` port so the source
//! can be swapped (static configuration today, a directory service later)
//! without touching callers.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::AgentProfile;
//!
//! let agent = AgentProfile::new("Sarah Chen", "Senior Claims Adjuster").unwrap();
//! assert_eq!(agent.greeting_at(9), "Good morning, Sarah");
//! ```

pub mod agent;
pub mod error;
pub mod ports;
pub mod adapters;

pub use agent::{AgentProfile, DayPeriod};
pub use error::PartyError;
pub use ports::ProfileProvider;
pub use adapters::StaticProfileProvider;
