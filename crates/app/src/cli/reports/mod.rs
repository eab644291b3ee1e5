use clap::{Args, Subcommand};

use super::Shell;

mod sales;
mod top_products;

#[derive(Debug, Args)]
pub(crate) struct ReportsCommand {
    #[command(subcommand)]
    command: ReportsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReportsSubcommand {
    /// Revenue per day
    Sales(ReportRange),
    /// Best sellers by units
    TopProducts(ReportRange),
}

#[derive(Debug, Args)]
pub(crate) struct ReportRange {
    /// Days to report on, ending today
    #[arg(long, default_value_t = 30)]
    days: u32,
}

pub(crate) async fn run(command: ReportsCommand, shell: &Shell) -> Result<(), String> {
    match command.command {
        ReportsSubcommand::Sales(range) => sales::run(range, shell).await,
        ReportsSubcommand::TopProducts(range) => top_products::run(range, shell).await,
    }
}
