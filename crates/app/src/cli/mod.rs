use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use till_app::{
    config::{ApiConfig, LoggingConfig, TerminalConfig},
    context::AppContext,
};

mod customers;
mod dashboard;
mod inventory;
mod orders;
mod products;
mod reports;
mod sell;

#[derive(Debug, Parser)]
#[command(name = "till", about = "Till point-of-sale CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    api: ApiConfig,

    #[command(flatten)]
    terminal: TerminalConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ring up a sale and print its receipt
    Sell(sell::SellArgs),
    Products(products::ProductsCommand),
    Customers(customers::CustomersCommand),
    Orders(orders::OrdersCommand),
    Inventory(inventory::InventoryCommand),
    Reports(reports::ReportsCommand),
    /// Headline figures for the shop
    Dashboard,
}

/// What every subcommand gets to work with.
pub(crate) struct Shell {
    pub(crate) app: AppContext,
    pub(crate) currency: &'static Currency,
}

impl Shell {
    pub(crate) fn money(&self, amount: Decimal) -> Money<'static, Currency> {
        Money::from_decimal(amount, self.currency)
    }
}

impl Cli {
    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let shell = Shell {
            app: AppContext::from_config(&self.api)
                .map_err(|error| format!("failed to initialise: {error}"))?,
            currency: self.terminal.currency.currency(),
        };

        match self.command {
            Commands::Sell(args) => sell::run(args, &shell).await,
            Commands::Products(command) => products::run(command, &shell).await,
            Commands::Customers(command) => customers::run(command, &shell).await,
            Commands::Orders(command) => orders::run(command, &shell).await,
            Commands::Inventory(command) => inventory::run(command, &shell).await,
            Commands::Reports(command) => reports::run(command, &shell).await,
            Commands::Dashboard => dashboard::run(&shell).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use till_app::config::{DisplayCurrency, LogFormat};

    use super::*;

    #[test]
    fn parses_globals_before_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "till",
            "--api-url",
            "http://till.test",
            "--currency",
            "gbp",
            "--log-format",
            "json",
            "dashboard",
        ])?;

        assert_eq!(cli.api.api_url, "http://till.test");
        assert_eq!(cli.terminal.currency, DisplayCurrency::Gbp);
        assert_eq!(cli.logging.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::Dashboard));

        Ok(())
    }

    #[test]
    fn sell_collects_repeated_barcodes() -> TestResult {
        let cli = Cli::try_parse_from([
            "till", "sell", "-b", "0001", "-b", "0001", "--method", "card",
        ])?;

        assert!(
            matches!(
                &cli.command,
                Commands::Sell(args)
                    if args.barcodes == ["0001", "0001"]
                        && args.method == "card"
                        && args.amount.is_none()
            ),
            "unexpected command {:?}",
            cli.command
        );

        Ok(())
    }
}
