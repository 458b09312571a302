use std::fmt;

/// Represents a user held by a [`UserDirectory`](crate::directory::UserDirectory).
///
/// Users are immutable once created. The fields are private so the only
/// way to obtain one is through the directory, which owns id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: u64,
    email: String,
    name: String,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub(crate) struct UserCreate {
    pub(crate) email: String,
    pub(crate) name: String,
}

impl UserCreate {
    pub(crate) fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

impl User {
    /// Builds the stored user from an assigned id and the caller's payload.
    ///
    /// # Arguments
    /// * `id` - Identifier allocated by the directory
    /// * `params` - Email and name, taken verbatim
    pub(crate) fn from_create(id: u64, params: UserCreate) -> Self {
        Self {
            id,
            email: params.email,
            name: params.name,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User{{id={}, email='{}', name='{}'}}",
            self.id, self.email, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_create_keeps_input_verbatim() {
        let user = User::from_create(7, UserCreate::new("  Mixed@Case.COM ", ""));

        assert_eq!(user.id(), 7);
        assert_eq!(user.email(), "  Mixed@Case.COM ");
        assert_eq!(user.name(), "");
    }

    #[test]
    fn test_display_renders_all_fields() {
        let user = User::from_create(1, UserCreate::new("john.doe@example.com", "John Doe"));

        assert_eq!(
            user.to_string(),
            "User{id=1, email='john.doe@example.com', name='John Doe'}"
        );
    }
}
