//! tsuru-admin CLI
//!
//! Command-line interface for administering a tsuru installation

use std::io;
use std::process::ExitCode;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;
use tsuru_admin_cli::{Config, Manager, commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    // Logs go to stderr so tables on stdout stay clean
    let filter = EnvFilter::try_from_env("TSURU_ADMIN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load_default()?;
    let manager = Manager::new("tsuru-admin", env!("CARGO_PKG_VERSION"), commands::registry());

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let code = manager
        .run(std::env::args_os(), &config, &mut stdin, &mut stdout, &mut stderr)
        .await;

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
