use async_trait::async_trait;
use ethers::types::U256;
use serde::Deserialize;

use crate::enums::Currency;
use crate::error::{ AppError, Result };
use crate::providers::{ BalanceRecord, ChainProvider, TxCount };

#[derive(Clone)]
pub struct BitcoinProvider {
    client: reqwest::Client,
    base_url: String,
}

// ── BlockCypher API response types ──────────────────────────────────

#[derive(Debug, Deserialize)]
struct BlockcypherBalance {
    balance: u64,
    n_tx: u64,
}

// ── Implementation ──────────────────────────────────────────────────

impl BitcoinProvider {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn balance_url(&self, address: &str) -> String {
        format!("{}/addrs/{}/balance", self.base_url, address)
    }
}

#[async_trait]
impl ChainProvider for BitcoinProvider {
    fn currency(&self) -> Currency {
        Currency::Btc
    }

    async fn get_balance_record(&self, address: &str) -> Result<BalanceRecord> {
        let url = self.balance_url(address);
        tracing::info!("Fetching BTC balance from {}", url);

        let resp = self.client
            .get(&url)
            .send().await
            .map_err(|e| AppError::Upstream(format!("BlockCypher request failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(
                AppError::Upstream(
                    format!("Invalid BTC address or BlockCypher API error: {}", resp.status())
                )
            );
        }

        let info: BlockcypherBalance = resp
            .json().await
            .map_err(|e| AppError::Upstream(format!("Failed to parse balance response: {}", e)))?;

        tracing::debug!("BlockCypher balance={} sat, n_tx={}", info.balance, info.n_tx);

        Ok(BalanceRecord {
            currency: Currency::Btc,
            address: address.to_string(),
            balance: Currency::Btc.format_base_units(U256::from(info.balance))?,
            tx_count: TxCount::Count(info.n_tx),
        })
    }
}
