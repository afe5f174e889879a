//! Book (catalog entry) model and related types

use validator::Validate;

use super::NON_BLANK;

/// Book held in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: String,
    /// Copies currently available for borrowing
    pub quantity: i32,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Case-insensitive prefix match on the name, folding one character at a time
    pub fn name_starts_with(&self, prefix: &str) -> bool {
        let mut name = self.name.chars().map(fold_case);
        prefix
            .chars()
            .map(fold_case)
            .all(|p| name.next() == Some(p))
    }

    /// Case-insensitive exact match on the name
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.chars().map(fold_case).eq(name.chars().map(fold_case))
    }
}

/// Ordinal case folding: a character's single-character upper case, or the
/// character itself when upper-casing would expand it (e.g. `ß`)
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Create book request
#[derive(Debug, Clone, Validate)]
pub struct CreateBook {
    pub id: i32,
    #[validate(regex(path = *NON_BLANK, message = "Book name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
}

impl CreateBook {
    pub fn new(id: i32, name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }
}

impl From<CreateBook> for Book {
    fn from(book: CreateBook) -> Self {
        Self {
            id: book.id,
            name: book.name,
            quantity: book.quantity,
        }
    }
}

/// Ordering for the sorted book listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookSort {
    #[default]
    Id,
    Name,
}

impl BookSort {
    pub fn label(self) -> &'static str {
        match self {
            BookSort::Id => "ID",
            BookSort::Name => "Name",
        }
    }
}
