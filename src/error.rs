//! Error types for the library console

use thiserror::Error;
use validator::ValidationErrors;

/// Application error codes, shared with the Elidune server numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    NotBorrowed = 12,
    SpecimenBorrowed = 13,
    BadValue = 18,
}

/// Kind of record a duplicate id was rejected for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Book,
    User,
}

impl RecordKind {
    /// Capitalised label used at the start of a message
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Book => "Book",
            RecordKind::User => "User",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Book => f.write_str("book"),
            RecordKind::User => f.write_str("user"),
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("A {kind} with ID {id} already exists.")]
    DuplicateId { kind: RecordKind, id: i32 },

    #[error("{} name cannot be empty.", .kind.label())]
    InvalidName { kind: RecordKind },

    #[error("Quantity cannot be negative.")]
    InvalidQuantity,

    #[error("User not found.")]
    UserNotFound(i32),

    #[error("Book not found.")]
    BookNotFound(i32),

    #[error("No book found with the name '{0}'.")]
    BookNameNotFound(String),

    #[error("Book is not available.")]
    BookUnavailable(i32),

    #[error("This user hasn't borrowed this book.")]
    NotBorrowed { user_id: i32, book_id: i32 },

    #[error("This user has already borrowed this book.")]
    AlreadyBorrowed { user_id: i32, book_id: i32 },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Numeric code reported alongside the message
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::DuplicateId { .. } => ErrorCode::Duplicate,
            AppError::InvalidName { .. } | AppError::InvalidQuantity => ErrorCode::BadValue,
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::BookNotFound(_) | AppError::BookNameNotFound(_) => ErrorCode::NoSuchItem,
            AppError::BookUnavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::NotBorrowed { .. } => ErrorCode::NotBorrowed,
            AppError::AlreadyBorrowed { .. } => ErrorCode::SpecimenBorrowed,
            AppError::Config(_) | AppError::Io(_) => ErrorCode::Failure,
        }
    }

    /// Map failed request validation onto the first offending field
    pub fn from_validation(kind: RecordKind, errors: &ValidationErrors) -> Self {
        let fields = errors.field_errors();
        if fields.contains_key("name") {
            AppError::InvalidName { kind }
        } else {
            AppError::InvalidQuantity
        }
    }

    /// Whether the session can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Config(_) | AppError::Io(_))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
