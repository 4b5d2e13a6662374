use std::sync::Arc;

use crate::chains::{ BitcoinProvider, EvmProvider, SolanaProvider };
use crate::config::Config;
use crate::enums::Currency;
use crate::error::{ AppError, Result };
use crate::providers::{ BalanceRecord, ChainProvider };

const ETH_NOT_CONFIGURED: &str = "Ethereum RPC endpoint not configured, set INFURA_URL";

/// Owns one provider per currency and routes lookups to them.
pub struct RpcManager {
    // Err holds why Ethereum is unavailable, reported only when ETH is requested
    eth_provider: std::result::Result<Arc<dyn ChainProvider>, String>,
    btc_provider: Arc<dyn ChainProvider>,
    solana_provider: Arc<dyn ChainProvider>,
}

impl RpcManager {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::new();

        let eth_provider = match &config.eth_rpc_url {
            Some(url) =>
                match EvmProvider::new(url) {
                    Ok(provider) => Ok(Arc::new(provider) as Arc<dyn ChainProvider>),
                    Err(e) => {
                        tracing::warn!("Failed to create ETH provider for {}: {}", url, e);
                        Err(match e {
                            AppError::Config(msg) => msg,
                            other => other.to_string(),
                        })
                    }
                }
            None => Err(ETH_NOT_CONFIGURED.to_string()),
        };

        Self {
            eth_provider,
            btc_provider: Arc::new(BitcoinProvider::new(client.clone(), &config.btc_api_url)),
            solana_provider: Arc::new(SolanaProvider::new(client, &config.solana_rpc_url)),
        }
    }

    /// Builds a manager from already constructed providers.
    pub fn with_providers(
        eth_provider: Option<Arc<dyn ChainProvider>>,
        btc_provider: Arc<dyn ChainProvider>,
        solana_provider: Arc<dyn ChainProvider>
    ) -> Self {
        Self {
            eth_provider: eth_provider.ok_or_else(|| ETH_NOT_CONFIGURED.to_string()),
            btc_provider,
            solana_provider,
        }
    }

    pub fn get_provider(&self, currency: Currency) -> Result<Arc<dyn ChainProvider>> {
        match currency {
            Currency::Eth => self.eth_provider.clone().map_err(AppError::Config),
            Currency::Btc => Ok(self.btc_provider.clone()),
            Currency::Sol => Ok(self.solana_provider.clone()),
        }
    }

    pub fn get_provider_by_code(&self, code: &str) -> Result<Arc<dyn ChainProvider>> {
        let currency: Currency = code.parse()?;
        self.get_provider(currency)
    }

    /// Resolves the record for `address` with the provider matching `code`.
    pub async fn resolve(&self, code: &str, address: &str) -> Result<BalanceRecord> {
        let provider = self.get_provider_by_code(code)?;
        tracing::debug!("Dispatching {} lookup to {} provider", code, provider.currency().display_name());

        provider.get_balance_record(address).await
    }
}
