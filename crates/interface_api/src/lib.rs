//! HTTP API Layer
//!
//! This crate provides the REST API for the claims desk using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: claim tracking, claim submission, agent profile, health
//! - **Middleware**: Authentication, tracing, request IDs, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(storage, config)?;
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{Entropy, HealthCheckable, KeyValueStore, ThreadEntropy};
use domain_claims::ClaimStore;
use domain_party::{ProfileProvider, StaticProfileProvider};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::middleware::{audit_middleware, auth_middleware};
use crate::handlers::{claims, health, profile, submissions};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The tracked claim collection
    pub store: Arc<RwLock<ClaimStore>>,
    /// Health of the storage behind the store
    pub storage: Arc<dyn HealthCheckable>,
    pub profiles: Arc<dyn ProfileProvider>,
    /// Randomness for decisions and reference numbers
    pub entropy: Arc<dyn Entropy>,
    pub config: ApiConfig,
}

impl AppState {
    /// Loads the claim store from `storage` and builds the configured profile
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable.
    pub fn new<S>(storage: Arc<S>, config: ApiConfig) -> Result<Self, ApiError>
    where
        S: KeyValueStore + HealthCheckable,
    {
        config.validate()?;
        let profiles = StaticProfileProvider::from_config(&config.agent_name, &config.agent_role)?;
        let store = ClaimStore::load(storage.clone());

        Ok(Self {
            store: Arc::new(RwLock::new(store)),
            storage,
            profiles: Arc::new(profiles),
            entropy: Arc::new(ThreadEntropy),
            config,
        })
    }

    /// Replaces the randomness source
    pub fn with_entropy(mut self, entropy: Arc<dyn Entropy>) -> Self {
        self.entropy = entropy;
        self
    }
}

/// Creates the main API router
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/summary", get(claims::claim_summary))
        .route("/submissions", post(submissions::submit_claim))
        .route(
            "/:reference",
            get(claims::get_claim)
                .patch(claims::update_claim)
                .delete(claims::delete_claim),
        );

    // Protected API routes
    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .route("/profile", get(profile::get_profile))
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
