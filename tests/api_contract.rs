//! Pins the public signatures of the directory API.
//!
//! Each test coerces a method to an explicit `fn` pointer type, so any
//! change to parameter or return types breaks compilation here first.

use user_directory::{User, UserDirectory};

#[test]
fn find_by_id_takes_id_and_returns_option() {
    let find_by_id: fn(&UserDirectory, u64) -> Option<User> = UserDirectory::find_by_id;

    let directory = UserDirectory::new();
    assert!(find_by_id(&directory, 1).is_some());
}

#[test]
fn find_all_returns_owned_vec() {
    let find_all: fn(&UserDirectory) -> Vec<User> = UserDirectory::find_all;

    let directory = UserDirectory::new();
    assert_eq!(find_all(&directory).len(), 2);
}

#[test]
fn create_takes_email_and_name_and_returns_user() {
    let create_from_str: fn(&mut UserDirectory, &'static str, &'static str) -> User = UserDirectory::create;
    let create_from_string: fn(&mut UserDirectory, String, String) -> User = UserDirectory::create;

    let mut directory = UserDirectory::new();
    let first = create_from_str(&mut directory, "a@x.com", "A");
    let second = create_from_string(&mut directory, "b@x.com".to_string(), "B".to_string());
    assert!(second.id() > first.id());
}

#[test]
fn user_accessors_have_expected_types() {
    let id: fn(&User) -> u64 = User::id;
    let email: fn(&User) -> &str = User::email;
    let name: fn(&User) -> &str = User::name;

    let user = UserDirectory::new().find_by_id(2).expect("seeded user 2");
    assert_eq!(id(&user), 2);
    assert!(!email(&user).is_empty());
    assert!(!name(&user).is_empty());
}

#[test]
fn directory_is_constructible_without_arguments() {
    let new: fn() -> UserDirectory = UserDirectory::new;
    let default: fn() -> UserDirectory = <UserDirectory as Default>::default;

    assert_eq!(new().find_all(), default().find_all());
}
