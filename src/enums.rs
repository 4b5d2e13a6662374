use std::fmt;
use std::str::FromStr;

use ethers::types::U256;
use serde::{ Deserialize, Serialize };

use crate::error::{ AppError, Result };

// ─── Currency ───────────────────────────────────────────────────────

/// Currencies the exporter can query, one per supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eth,
    Btc,
    Sol,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Eth => "ETH",
            Currency::Btc => "BTC",
            Currency::Sol => "SOL",
        }
    }

    /// Human-readable chain name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Eth => "Ethereum",
            Currency::Btc => "Bitcoin",
            Currency::Sol => "Solana",
        }
    }

    /// Decimal places between the base unit (wei, satoshi, lamport) and the native unit.
    pub fn decimals(&self) -> u32 {
        match self {
            Currency::Eth => 18,
            Currency::Btc => 8,
            Currency::Sol => 9,
        }
    }

    /// Converts a base-unit amount into an exact native-unit decimal string.
    ///
    /// Trailing fractional zeros are dropped but one fractional digit is always
    /// kept, so `150000000` satoshi renders as `1.5` and one ether as `1.0`.
    pub fn format_base_units(&self, amount: U256) -> Result<String> {
        let formatted = ethers::utils
            ::format_units(amount, self.decimals())
            .map_err(|e| AppError::Upstream(format!("Failed to format balance: {}", e)))?;

        Ok(trim_fraction(&formatted))
    }

    pub fn all() -> &'static [Currency] {
        &[Currency::Eth, Currency::Btc, Currency::Sol]
    }
}

fn trim_fraction(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}.0", integer)
            } else {
                format!("{}.{}", integer, fraction)
            }
        }
        None => format!("{}.0", formatted),
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ETH" => Ok(Currency::Eth),
            "BTC" => Ok(Currency::Btc),
            "SOL" => Ok(Currency::Sol),
            _ => Err(AppError::UnsupportedCurrency(s.to_string())),
        }
    }
}
