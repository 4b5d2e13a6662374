use std::fmt;

use async_trait::async_trait;
use serde::{ Serialize, Serializer };

use crate::enums::Currency;
use crate::error::Result;

/// Marker written in place of a transaction count the upstream cannot supply.
pub const TX_COUNT_NOT_AVAILABLE: &str = "N/A";

/// Transaction (or nonce) count for an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxCount {
    Count(u64),
    NotAvailable,
}

impl Serialize for TxCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            TxCount::Count(n) => serializer.serialize_u64(*n),
            TxCount::NotAvailable => serializer.serialize_str(TX_COUNT_NOT_AVAILABLE),
        }
    }
}

impl fmt::Display for TxCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxCount::Count(n) => write!(f, "{}", n),
            TxCount::NotAvailable => f.write_str(TX_COUNT_NOT_AVAILABLE),
        }
    }
}

/// Normalized balance snapshot for one address. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceRecord {
    pub currency: Currency,
    pub address: String,
    pub balance: String,
    pub tx_count: TxCount,
}

impl fmt::Display for BalanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "currency={} address={} balance={} tx_count={}",
            self.currency,
            self.address,
            self.balance,
            self.tx_count
        )
    }
}

#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Currency this provider reports balances in
    fn currency(&self) -> Currency;

    /// Fetch balance and transaction count for an address
    async fn get_balance_record(&self, address: &str) -> Result<BalanceRecord>;
}
