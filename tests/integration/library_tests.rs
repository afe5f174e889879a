//! Catalog, membership and loan workflow exercised together

use library_console::{
    models::{BookSort, CreateBook, CreateUser, LoanState},
    AppConfig, AppError, AppState,
};
use rstest::{fixture, rstest};

#[fixture]
fn state() -> AppState {
    AppState::new(AppConfig::default())
}

#[rstest]
fn test_dune_duty_scenario(mut state: AppState) {
    let services = &mut state.services;
    services.catalog().add_book(CreateBook::new(1, "Dune", 2)).unwrap();
    services.catalog().add_book(CreateBook::new(2, "Duty", 0)).unwrap();

    let names: Vec<String> = services
        .catalog()
        .list_by_prefix("Du")
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["Dune", "Duty"]);

    services.users().add_user(CreateUser::new(10, "Alice")).unwrap();

    let err = services.loans().borrow(10, 2).unwrap_err();
    assert!(matches!(err, AppError::BookUnavailable(2)));

    let loan = services.loans().borrow(10, 1).unwrap();
    assert_eq!(loan.remaining, 1);
    assert_eq!(services.catalog().get_book(1).unwrap().quantity, 1);

    services.loans().return_book(10, 1).unwrap();
    assert_eq!(services.catalog().get_book(1).unwrap().quantity, 2);
    assert_eq!(services.loans().state(10, 1).unwrap(), LoanState::NotBorrowed);
}

#[rstest]
fn test_user_listing_shows_borrow_order(mut state: AppState) {
    let services = &mut state.services;
    for (id, name) in [(3, "Emma"), (1, "Dune"), (2, "Atlas")] {
        services.catalog().add_book(CreateBook::new(id, name, 1)).unwrap();
    }
    services.users().add_user(CreateUser::new(20, "Bob")).unwrap();
    services.users().add_user(CreateUser::new(10, "Alice")).unwrap();

    services.loans().borrow(20, 3).unwrap();
    services.loans().borrow(20, 1).unwrap();
    services.loans().borrow(10, 2).unwrap();

    let users = services.users().list_users();
    assert_eq!(users[0].id, 10);
    assert_eq!(users[1].borrowed_books.iter().copied().collect::<Vec<_>>(), vec![3, 1]);

    let (_, borrowers) = services.users().list_borrowers_by_name("emma").unwrap();
    assert_eq!(borrowers.len(), 1);
    assert_eq!(borrowers[0].id, 20);
}

#[rstest]
fn test_sorted_listing(mut state: AppState) {
    let services = &mut state.services;
    for (id, name) in [(3, "Emma"), (1, "dune"), (2, "Atlas"), (4, "Emma")] {
        services.catalog().add_book(CreateBook::new(id, name, 1)).unwrap();
    }

    let by_id: Vec<i32> = services.catalog().list_sorted(BookSort::Id).iter().map(|b| b.id).collect();
    assert_eq!(by_id, vec![1, 2, 3, 4]);

    let by_name: Vec<i32> = services
        .catalog()
        .list_sorted(BookSort::Name)
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(by_name, vec![2, 3, 4, 1]);
}

#[rstest]
fn test_unknown_book_leaves_user_untouched(mut state: AppState) {
    state.services.users().add_user(CreateUser::new(10, "Alice")).unwrap();
    assert!(matches!(
        state.services.loans().borrow(10, 5),
        Err(AppError::BookNotFound(5))
    ));
    assert!(matches!(
        state.services.loans().borrow(11, 5),
        Err(AppError::UserNotFound(11))
    ));
    let user = state.services.users().get_user(10).unwrap();
    assert!(user.borrowed_books.is_empty());
    assert!(state.services.repository().books.is_empty());
}
