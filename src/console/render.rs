//! One-line text renderings of books and users

use crate::models::{book::Book, user::User};

pub fn book_line(book: &Book) -> String {
    format!("ID: {}, Name: {}, Quantity: {}", book.id, book.name, book.quantity)
}

pub fn borrower_line(user: &User) -> String {
    format!("User ID: {}, Name: {}", user.id, user.name)
}

pub fn user_line(user: &User) -> String {
    let borrowed = if user.borrowed_books.is_empty() {
        "No borrowed books".to_string()
    } else {
        user.borrowed_books
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("User ID: {}, Name: {}, Borrowed Books: {}", user.id, user.name, borrowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_line() {
        let mut user = User::new(10, "Alice");
        assert_eq!(user_line(&user), "User ID: 10, Name: Alice, Borrowed Books: No borrowed books");
        user.borrow_book(4);
        user.borrow_book(2);
        assert_eq!(user_line(&user), "User ID: 10, Name: Alice, Borrowed Books: 4, 2");
    }

    #[test]
    fn test_book_line() {
        let book = Book {
            id: 1,
            name: "Dune".to_string(),
            quantity: 2,
        };
        assert_eq!(book_line(&book), "ID: 1, Name: Dune, Quantity: 2");
    }
}
