//! Repository layer holding the in-memory collections

pub mod books;
pub mod users;

/// Main repository struct owning every collection for the session
#[derive(Debug, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
            users: users::UsersRepository::new(),
        }
    }
}
