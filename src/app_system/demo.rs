use std::io::Write;
use tracing::{info, info_span, warn};

use crate::directory::UserDirectory;
use crate::error::AppError;

/// Id the demo looks up first.
pub const DEMO_LOOKUP_ID: u64 = 1;

/// Walks through the directory API: lookup, listing, then creation.
///
/// Human-readable results go to `out`; diagnostics go through `tracing`.
pub fn run_demo<W: Write>(directory: &mut UserDirectory, out: &mut W) -> Result<(), AppError> {
    {
        let _span = info_span!("user_lookup", user_id = DEMO_LOOKUP_ID).entered();
        match directory.find_by_id(DEMO_LOOKUP_ID) {
            Some(user) => {
                writeln!(out, "Found user: {}", user.name())?;
                writeln!(out, "User ID: {}", user.id())?;
            }
            None => warn!("Demo user not present"),
        }
    }

    {
        let _span = info_span!("user_listing").entered();
        let users = directory.find_all();
        writeln!(out, "Total users: {}", users.len())?;
        for user in &users {
            writeln!(out, "  {}", user)?;
        }
    }

    {
        let _span = info_span!("user_creation").entered();
        let created = directory.create("new.user@example.com", "New User");
        info!(user_id = created.id(), "Demo user created");
        writeln!(out, "Created user with ID: {}", created.id())?;
    }

    Ok(())
}
