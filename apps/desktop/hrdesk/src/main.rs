use hrdesk::cli::{Cli, run};

use client_core::config::load_dotenv;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    // before parsing, so HR_API_BASE_URL from .env reaches clap
    load_dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("hrdesk: {}", e.user_message());
            if e.is_unauthenticated() {
                eprintln!("hrdesk: run `hrdesk login <username>` to sign in again");
            }
            ExitCode::FAILURE
        }
    }
}
