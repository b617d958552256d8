//! Circulation desk entry point.

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use circulation_cli::cli::{Cli, Commands};
use circulation_cli::commands;
use circulation_cli::menu::Menu;

fn main() {
    // Load .env.local if it exists (for CIRCULATION_DATA_DIR etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let data_dir = cli.data_dir();

    let result = commands::open_library(&data_dir, !cli.no_seed).and_then(|mut library| {
        match cli.command {
            None | Some(Commands::Menu) => {
                Menu::new(library)?.run()?;
                Ok(())
            }
            Some(cmd) => commands::execute(cmd, &mut library, &mut io::stdout()),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
