//! Desk Insights
//!
//! Fetches office desk bookings from the upstream booking service, keeps a
//! local CSV mirror and serves office capacity, desk availability, people and
//! team lookups as a REST JSON API.

use std::sync::Arc;

use tokio::sync::RwLock;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use models::DashboardContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    snapshot: Arc<RwLock<Arc<DashboardContext>>>,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services, initial: DashboardContext) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            snapshot: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    /// Current dashboard snapshot
    pub async fn snapshot(&self) -> Arc<DashboardContext> {
        self.snapshot.read().await.clone()
    }

    /// Swap in a new snapshot
    pub async fn replace_snapshot(&self, next: DashboardContext) -> Arc<DashboardContext> {
        let next = Arc::new(next);
        *self.snapshot.write().await = next.clone();
        next
    }
}
