use async_trait::async_trait;
use ethers::{
    providers::{ Http, Middleware, Provider },
    types::Address,
    utils::to_checksum,
};
use std::sync::Arc;

use crate::enums::Currency;
use crate::error::{ AppError, Result };
use crate::providers::{ BalanceRecord, ChainProvider, TxCount };

#[derive(Clone)]
pub struct EvmProvider {
    provider: Arc<Provider<Http>>,
}

impl EvmProvider {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let provider = Provider::<Http>
            ::try_from(rpc_url)
            .map_err(|e| AppError::Config(format!("Invalid Ethereum RPC URL: {}", e)))?;

        Ok(Self {
            provider: Arc::new(provider),
        })
    }
}

/// Parses a hex Ethereum address, with or without `0x`.
///
/// Mixed-case input must carry a valid EIP-55 checksum. All-lowercase and
/// all-uppercase input has no checksum to verify.
pub fn parse_address(address: &str) -> Result<Address> {
    let hex = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidAddress(format!("not a 20-byte hex address: {}", address)));
    }

    let parsed: Address = hex
        .parse()
        .map_err(|_| AppError::InvalidAddress(address.to_string()))?;

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());

    if has_lower && has_upper && &to_checksum(&parsed, None)[2..] != hex {
        return Err(AppError::InvalidAddress(format!("checksum mismatch: {}", address)));
    }

    Ok(parsed)
}

#[async_trait]
impl ChainProvider for EvmProvider {
    fn currency(&self) -> Currency {
        Currency::Eth
    }

    async fn get_balance_record(&self, address: &str) -> Result<BalanceRecord> {
        let addr = parse_address(address)?;
        let checksummed = to_checksum(&addr, None);

        tracing::info!("Fetching ETH balance for {}", checksummed);

        let balance = self.provider
            .get_balance(addr, None).await
            .map_err(|e| AppError::Upstream(format!("Failed to get balance: {}", e)))?;

        let nonce = self.provider
            .get_transaction_count(addr, None).await
            .map_err(|e| AppError::Upstream(format!("Failed to get transaction count: {}", e)))?;

        tracing::debug!("eth_getBalance={} wei, eth_getTransactionCount={}", balance, nonce);

        if nonce.bits() > 64 {
            return Err(AppError::Upstream(format!("Transaction count out of range: {}", nonce)));
        }

        Ok(BalanceRecord {
            currency: Currency::Eth,
            address: checksummed,
            balance: Currency::Eth.format_base_units(balance)?,
            tx_count: TxCount::Count(nonce.as_u64()),
        })
    }
}
