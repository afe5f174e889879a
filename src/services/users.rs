//! User (membership) service

use validator::Validate;

use crate::{
    error::{AppError, AppResult, RecordKind},
    models::{
        book::Book,
        user::{CreateUser, User},
    },
    repository::Repository,
};

pub struct UsersService<'a> {
    repository: &'a mut Repository,
}

impl<'a> UsersService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self { repository }
    }

    /// Add a new user. The id is checked before the name.
    pub fn add_user(&mut self, user: CreateUser) -> AppResult<User> {
        if self.repository.users.contains(user.id) {
            return Err(AppError::DuplicateId { kind: RecordKind::User, id: user.id });
        }
        user.validate()
            .map_err(|e| AppError::from_validation(RecordKind::User, &e))?;

        let created = self.repository.users.create(user.into())?.clone();
        tracing::info!("Users create: user id={} name={:?}", created.id, created.name);
        Ok(created)
    }

    /// Get user by ID
    pub fn get_user(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).cloned()
    }

    /// All users ordered by id
    pub fn list_users(&self) -> Vec<User> {
        self.repository.users.list_all().into_iter().cloned().collect()
    }

    /// Users currently holding `book_id`
    pub fn list_borrowers(&self, book_id: i32) -> Vec<User> {
        self.repository
            .users
            .list_borrowers_of(book_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Resolve a book by name, then list the users holding it
    pub fn list_borrowers_by_name(&self, book_name: &str) -> AppResult<(Book, Vec<User>)> {
        let book = self.repository.books.get_by_name(book_name)?.clone();
        let borrowers = self.list_borrowers(book.id);
        tracing::debug!("Users holding book id={}: {}", book.id, borrowers.len());
        Ok((book, borrowers))
    }

    pub fn count(&self) -> usize {
        self.repository.users.len()
    }
}
