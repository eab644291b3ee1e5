//! Till point-of-sale CLI

use std::process;

use clap::Parser;
use till_app::observability::init_logging;

mod cli;

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = init_logging(cli.logging()) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
