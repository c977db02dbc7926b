//! Toolcrib Equipment Reservation & Checkout Engine
//!
//! Tracks a shared pool of physical equipment and its reservation
//! lifecycle: users request a model, ambassadors stage candidate instances,
//! and checkouts claim and later release individual items. The engine keeps
//! claims, checkouts and instance availability consistent with each other;
//! transport, durable persistence and authentication belong to the
//! embedding application.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorCode};

/// Application state the embedding transport composes over
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
