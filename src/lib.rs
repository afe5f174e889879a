//! Library console
//!
//! Tracks a library's book inventory and user borrowing records in memory,
//! driven from an interactive text menu.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state owned by the session for the process lifetime
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub services: services::Services,
}

impl AppState {
    /// Fresh state with empty collections
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            services: services::Services::new(repository::Repository::new()),
        }
    }
}
