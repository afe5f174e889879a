//! Business logic services

pub mod catalog;
pub mod loans;
pub mod users;

use crate::repository::Repository;

/// Container for all services.
///
/// Owns the repository; each accessor hands out a short-lived service view
/// borrowing it, so every operation runs against the same collections.
#[derive(Debug, Default)]
pub struct Services {
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn catalog(&mut self) -> catalog::CatalogService<'_> {
        catalog::CatalogService::new(&mut self.repository)
    }

    pub fn users(&mut self) -> users::UsersService<'_> {
        users::UsersService::new(&mut self.repository)
    }

    pub fn loans(&mut self) -> loans::LoansService<'_> {
        loans::LoansService::new(&mut self.repository)
    }

    /// Read-only access to the underlying collections
    pub fn repository(&self) -> &Repository {
        &self.repository
    }
}
