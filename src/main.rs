use std::io;

mod cli;
use cli::{CliMode, USAGE, parse_env_args, run_agenda_mode};
mod tui;
use tui::run_tui;

use aveiro_events::storage::config::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    setup_logging();

    let cli_mode = match parse_env_args() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    match cli_mode {
        CliMode::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliMode::Agenda(options) => run_agenda_mode(options).await,
        CliMode::Interactive(options) => run_tui(options).await,
    }
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "aveiro-events.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("aveiro-events started");
}
