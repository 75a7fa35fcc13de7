mod cli;
mod error;
mod models;
mod store;

use anyhow::Context;
use clap::Parser;
use cli::{App, Cli};
use colored::*;
use store::QuoteStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let operation = cli.operation();
    let store = QuoteStore::new(&cli.file);
    info!("Using quotes file {}", store.path().display());

    let app = App::new(store);
    let result = app.run(
        operation,
        &mut std::io::stdout().lock(),
        &mut rand::thread_rng(),
    );

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_user_error() => {
            // Bad input and empty stores are reported, not treated as failures
            println!("{}", e.to_string().yellow());
            Ok(())
        },
        Err(e) => {
            error!("Command execution failed: {:?}", e);
            println!("{} {}", "Error executing command:".red(), e.to_string().red());
            Err(e).with_context(|| format!("quotes file {}", cli.file.display()))
        },
    }
}
