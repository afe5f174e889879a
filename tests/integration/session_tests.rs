//! Scripted console sessions

use library_console::{console::Session, AppConfig, AppState};

fn run_script(state: &mut AppState, script: &str) -> String {
    let mut output = Vec::new();
    Session::new(state, script.as_bytes(), &mut output)
        .run()
        .expect("session runs to completion");
    String::from_utf8(output).expect("output is UTF-8")
}

#[test]
fn test_full_session() {
    let mut state = AppState::new(AppConfig::default());
    let script = [
        // Add Book 1 "Dune" x2, Book 2 "Duty" x0
        "1", "1", "Dune", "2",
        "1", "2", "Duty", "0",
        // Add User 10 "Alice"
        "2", "10", "Alice",
        // Borrow unavailable, then available
        "3", "10", "2",
        "3", "10", "1",
        // Prefix search and listings
        "6", "du",
        "5", "2",
        "7", "DUNE",
        "8",
        // Return, then return again
        "4", "10", "1",
        "4", "10", "1",
        "9",
    ]
    .join("\n");

    let output = run_script(&mut state, &script);

    assert_eq!(output.matches("Book added successfully.").count(), 2);
    assert!(output.contains("User added successfully."));
    assert!(output.contains("Book is not available."));
    assert!(output.contains("Book borrowed successfully."));
    assert!(output.contains(
        "Books with the prefix 'du' :\nID: 1, Name: Dune, Quantity: 1\nID: 2, Name: Duty, Quantity: 0\n"
    ));
    assert!(output.contains(
        "Books sorted by Name:\nID: 1, Name: Dune, Quantity: 1\nID: 2, Name: Duty, Quantity: 0\n"
    ));
    assert!(output.contains("Users who borrowed the book 'DUNE':\nUser ID: 10, Name: Alice\n"));
    assert!(output.contains("User ID: 10, Name: Alice, Borrowed Books: 1\n"));
    assert!(output.contains("Book returned successfully."));
    assert!(output.contains("This user hasn't borrowed this book."));
    assert!(output.ends_with("Exiting the program...\n"));

    let book = state.services.catalog().get_book(1).unwrap();
    assert_eq!(book.quantity, 2);
}

#[test]
fn test_lookup_messages() {
    let mut state = AppState::new(AppConfig::default());
    let script = [
        "2", "10", "   ",
        "6", "",
        "6", "Zz",
        "7", "Emma",
        "5", "3",
        "3", "x",
        "9",
    ]
    .join("\n");

    let output = run_script(&mut state, &script);

    assert!(output.contains("User name cannot be empty."));
    assert!(output.contains("Prefix cannot be empty."));
    assert!(output.contains("No books found with the given prefix."));
    assert!(output.contains("No book found with the name 'Emma'."));
    assert!(output.contains("Invalid choice. Please enter 1 or 2."));
    assert!(output.contains("Invalid User ID."));
    assert_eq!(state.services.users().count(), 0);
}

#[test]
fn test_nobody_borrowed_and_empty_user_list() {
    let mut state = AppState::new(AppConfig::default());
    let script = ["1", "1", "Dune", "1", "2", "10", "Alice", "7", "dune", "8", "9"].join("\n");

    let output = run_script(&mut state, &script);

    assert!(output.contains("No users have borrowed the book 'dune'."));
    assert!(output.contains("User ID: 10, Name: Alice, Borrowed Books: No borrowed books"));
}

#[test]
fn test_input_ending_mid_action() {
    let mut state = AppState::new(AppConfig::default());
    let output = run_script(&mut state, "1\n7\nDune");

    assert!(output.contains("Enter Quantity: "));
    assert!(!output.contains("Book added successfully."));
    assert_eq!(state.services.catalog().count(), 0);
}

#[test]
fn test_undecodable_input_keeps_library_data() {
    let mut state = AppState::new(AppConfig::default());
    let mut script = b"1\n1\nDune\n2\n6\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"8\n9\n");

    let mut output = Vec::new();
    Session::new(&mut state, &script[..], &mut output)
        .run()
        .expect("session survives invalid UTF-8");
    let output = String::from_utf8(output).expect("output is UTF-8");

    assert!(output.contains("No books found with the given prefix."));
    assert!(output.ends_with("Exiting the program...\n"));
    assert_eq!(state.services.catalog().get_book(1).unwrap().name, "Dune");
}
