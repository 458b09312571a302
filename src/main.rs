use tracing::info;
use user_directory::{run_demo, setup_tracing, AppError, UserDirectory};

fn main() -> Result<(), AppError> {
    // Setup tracing once for the entire application
    setup_tracing()?;

    info!("Starting user directory demo");

    let mut directory = UserDirectory::new();
    let stdout = std::io::stdout();
    run_demo(&mut directory, &mut stdout.lock())?;

    info!(total_users = directory.len(), "Demo completed");
    Ok(())
}
