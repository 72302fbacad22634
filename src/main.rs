use std::process::ExitCode;
use std::sync::Arc;

use signif_sheets::adapters::sheets::spreadsheet_manager::SpreadsheetManager;
use signif_sheets::cli::{self, Command};
use signif_sheets::config::app_config::AppConfig;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args: Vec<String> = std::env::args().collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(report) => {
            log::error!("{:?}", report);
            eprintln!("{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    if command == Command::Help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(report) => {
            log::error!("Could not load configuration: {:?}", report);
            return ExitCode::FAILURE;
        }
    };

    let spreadsheet = match SpreadsheetManager::new(config.sheets.clone()).await {
        Ok(spreadsheet) => Arc::new(spreadsheet),
        Err(report) => {
            log::error!("Could not connect to the spreadsheet API: {:?}", report);
            return ExitCode::FAILURE;
        }
    };

    let today = chrono::Local::now().date_naive();
    match cli::execute(&command, spreadsheet, config.layout, today).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
