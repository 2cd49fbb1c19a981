//! # SabjiRate Command Line Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments (clap)
//! 2. Initialize tracing (logging, to stderr)
//! 3. Load configuration from `SABJI_*` environment variables
//! 4. Run the command, print JSON to stdout
//!
//! Errors are printed as `{ "code": ..., "message": ... }` on stderr with
//! exit status 1.

use clap::Parser;
use sabji_app::cli::{execute, Cli};
use sabji_app::error::ApiError;
use sabji_app::state::ConfigState;
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    sabji_app::init_tracing();

    let config = ConfigState::from_env();
    info!(currency = %config.currency_symbol, max_list_items = config.max_list_items, "Configuration loaded");

    match execute(cli, &config).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(ApiError::internal(e.to_string())),
        },
        Err(err) => fail(err),
    }
}

fn fail(err: ApiError) -> ! {
    eprintln!("{}", err.to_json());
    std::process::exit(1);
}
