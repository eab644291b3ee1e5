//! Terminal Display Config

use clap::Args;
use rusty_money::iso::{self, Currency};

/// Currencies offered on the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DisplayCurrency {
    /// US dollar
    Usd,

    /// Euro
    Eur,

    /// Pound sterling
    Gbp,
}

impl DisplayCurrency {
    /// ISO currency used to format amounts.
    #[must_use]
    pub fn currency(self) -> &'static Currency {
        match self {
            Self::Usd => iso::USD,
            Self::Eur => iso::EUR,
            Self::Gbp => iso::GBP,
        }
    }
}

/// Terminal display settings.
#[derive(Debug, Clone, Copy, Args)]
pub struct TerminalConfig {
    /// Currency amounts are shown in (usd, eur, gbp)
    #[arg(long, env = "TILL_CURRENCY", value_enum, default_value_t = DisplayCurrency::Usd)]
    pub currency: DisplayCurrency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currencies_map_to_iso_codes() {
        assert_eq!(DisplayCurrency::Usd.currency(), iso::USD);
        assert_eq!(DisplayCurrency::Eur.currency(), iso::EUR);
        assert_eq!(DisplayCurrency::Gbp.currency(), iso::GBP);
    }
}
