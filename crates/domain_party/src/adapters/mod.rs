//! Profile provider adapters
//!
//! - **StaticProfileProvider**: a single profile built from configuration

pub mod static_profile;

pub use static_profile::StaticProfileProvider;
