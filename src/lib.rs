//! # User Directory
//!
//! A minimal in-memory user directory with lookup, listing and creation.
//!
//! - **Domain types** - Immutable user values → [`User`]
//! - **Directory** - Owns the users and assigns ids → [`UserDirectory`]
//! - **Application wiring** - Tracing setup and the demo walk-through → [`setup_tracing`], [`run_demo`]
//!
//! ## Example Usage
//!
//! ```rust
//! use user_directory::UserDirectory;
//!
//! let mut directory = UserDirectory::new();
//!
//! let john = directory.find_by_id(1).expect("seeded");
//! assert_eq!(john.email(), "john.doe@example.com");
//! assert!(directory.find_by_id(999).is_none());
//!
//! let created = directory.create("new.user@example.com", "New User");
//! assert_eq!(directory.find_all().len(), 3);
//! assert!(created.id() > john.id());
//! ```

pub mod app_system;
pub mod directory;
pub mod domain;
pub mod error;

pub use app_system::{run_demo, setup_tracing};
pub use directory::UserDirectory;
pub use domain::User;
pub use error::AppError;
