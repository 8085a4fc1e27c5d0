use std::process::ExitCode;

use remembrance::storage::get_data_dir;
use remembrance::storage::settings::load_settings;
use remembrance::ui::{greeting, ConsoleInput};
use remembrance::{resolve_value, StorageError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Could not resolve remembered name: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StorageError> {
    let settings = load_settings();
    let location = settings.record_location(&get_data_dir()?);
    info!(record = %location, "resolving remembered name");

    let mut input = ConsoleInput::stdio();
    let resolution = resolve_value(&location, &mut input, &settings.prompt)?;

    println!("{}", greeting(&resolution));
    Ok(())
}
