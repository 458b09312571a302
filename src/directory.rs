//! In-memory user directory.
//!
//! [`UserDirectory`] owns the users and the counter that hands out ids.
//! Every fresh instance starts from the same two seeded users, and ids are
//! never reused: the counter only moves forward.

use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

use crate::domain::{User, UserCreate};

/// Users present in every freshly constructed directory, as `(id, email, name)`.
const SEED_USERS: [(u64, &str, &str); 2] = [
    (1, "john.doe@example.com", "John Doe"),
    (2, "jane.smith@example.com", "Jane Smith"),
];

/// Holds user records and serves lookup and creation requests against them.
///
/// Construct one per consumer and pass it explicitly; there is no shared
/// instance.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    store: BTreeMap<u64, User>,
    next_id: u64,
}

impl UserDirectory {
    /// Creates a directory seeded with the two fixed users.
    pub fn new() -> Self {
        let store: BTreeMap<u64, User> = SEED_USERS
            .iter()
            .map(|&(id, email, name)| (id, User::from_create(id, UserCreate::new(email, name))))
            .collect();
        let next_id = store.keys().next_back().map_or(1, |max| max + 1);

        debug!(seeded = store.len(), next_id, "User directory seeded");
        Self { store, next_id }
    }

    /// Looks up a user by id.
    ///
    /// A missing id is an ordinary outcome and yields `None`.
    #[instrument(fields(user_id = id), skip(self, id))]
    pub fn find_by_id(&self, id: u64) -> Option<User> {
        let user = self.store.get(&id).cloned();

        match &user {
            Some(user) => debug!(user_name = %user.name(), "User found"),
            None => debug!("User not found"),
        }

        user
    }

    /// Returns a snapshot of every user, ordered by id.
    #[instrument(skip(self))]
    pub fn find_all(&self) -> Vec<User> {
        debug!(count = self.store.len(), "Listing users");
        self.store.values().cloned().collect()
    }

    /// Creates a user with the next free id and stores it.
    ///
    /// Email and name are stored exactly as given; empty strings and
    /// duplicate emails are accepted.
    pub fn create(&mut self, email: impl Into<String>, name: impl Into<String>) -> User {
        self.insert(UserCreate::new(email, name))
    }

    #[instrument(fields(user_email = %params.email, user_name = %params.name), skip(self, params))]
    fn insert(&mut self, params: UserCreate) -> User {
        let id = self.next_id;
        self.next_id += 1;

        let user = User::from_create(id, params);
        self.store.insert(id, user.clone());

        info!(user_id = id, "User created");
        user
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
impl UserDirectory {
    /// A directory with no seed, for exercising callers against an empty store.
    pub(crate) fn unseeded() -> Self {
        Self {
            store: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
