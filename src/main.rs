#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # Tic-Tac-Toe AI

pub mod cli_options;
pub mod config;
pub mod logger;
pub mod session;
pub mod setup;

use crate::{
    cli_options::CliOptions,
    config::Config,
    session::Session,
};
use anyhow::Context;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Data from the setup function
struct SetupData {
    config: Config,
    games: Option<u32>,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: CliOptions) -> anyhow::Result<SetupData> {
    let config = setup::load_config(&cli_options.config).context("failed to load config")?;

    eprintln!("setting up logger...");
    let worker_guard = logger::setup(&config).context("failed to initialize logger")?;

    eprintln!();
    Ok(SetupData {
        config,
        games: cli_options.games,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// This also loads the config, logging errors to the stderr instead of the loggers,
/// which are not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options = argh::from_env();

    let setup_data = setup(cli_options)?;
    real_main(setup_data)?;
    Ok(())
}

/// The actual entry point
fn real_main(setup_data: SetupData) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    info!(
        random_opening = setup_data.config.random_opening,
        seed = ?setup_data.config.seed,
        "starting session"
    );
    let ret = {
        let mut session = Session::new(stdin.lock(), stdout.lock(), &setup_data.config);
        let ret = session.run(setup_data.games).context("session failed");
        info!("played {} games", session.games_played());
        ret
    };

    if ret.is_ok() {
        info!("successful shutdown");
    }

    // Logging no longer reliable past this point
    drop(setup_data.worker_guard);

    ret
}
