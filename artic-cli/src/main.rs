mod app;
mod command;
mod paths;
mod render;

use std::fs::File;
use std::io;
use std::process::ExitCode;

use artic_lib::ArticClient;
use artic_lib::config::ClientConfig;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::BufReader;

fn init_logging() {
    paths::rotate_logs();

    let path = paths::log_file()
        .filter(|path| path.parent().is_some_and(|dir| std::fs::create_dir_all(dir).is_ok()))
        .unwrap_or_else(|| "artic.log".into());

    let log_file = File::create(&path).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    log::info!("Logging to {}", path.display());
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let _ = dotenvy::dotenv();

    let client = ClientConfig::from_env().and_then(|config| ArticClient::from_config(&config));
    let client = match client {
        Ok(client) => client,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Using {}", client.base_url());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    if let Err(e) = app::run(&client, stdin, &mut stdout).await {
        log::error!("Terminal I/O failed: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
