use async_trait::async_trait;
use ethers::types::U256;
use serde::Deserialize;
use serde_json::json;

use crate::enums::Currency;
use crate::error::{ AppError, Result };
use crate::providers::{ BalanceRecord, ChainProvider, TxCount };

#[derive(Clone)]
pub struct SolanaProvider {
    client: reqwest::Client,
    rpc_url: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<BalanceResult>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct BalanceResult {
    value: u64,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl SolanaProvider {
    pub fn new(client: reqwest::Client, rpc_url: &str) -> Self {
        Self {
            client,
            rpc_url: rpc_url.to_string(),
        }
    }
}

#[async_trait]
impl ChainProvider for SolanaProvider {
    fn currency(&self) -> Currency {
        Currency::Sol
    }

    async fn get_balance_record(&self, address: &str) -> Result<BalanceRecord> {
        tracing::info!("Fetching SOL balance for {} from {}", address, self.rpc_url);

        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [address]
        });

        let resp = self.client
            .post(&self.rpc_url)
            .json(&payload)
            .send().await
            .map_err(|e| AppError::Upstream(format!("Solana RPC request failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(
                AppError::Upstream(
                    format!("Invalid Solana address or RPC error: {}", resp.status())
                )
            );
        }

        let body: RpcResponse = resp
            .json().await
            .map_err(|e| AppError::Upstream(format!("Failed to parse Solana RPC response: {}", e)))?;

        // Missing result covers both a bad address and a node-side failure
        let result = match (body.result, body.error) {
            (Some(result), _) => result,
            (None, Some(err)) => {
                return Err(
                    AppError::Upstream(
                        format!("No result from Solana RPC: {} (code {})", err.message, err.code)
                    )
                );
            }
            (None, None) => {
                return Err(AppError::Upstream("No result from Solana RPC".to_string()));
            }
        };

        tracing::debug!("getBalance={} lamports", result.value);

        Ok(BalanceRecord {
            currency: Currency::Sol,
            address: address.to_string(),
            balance: Currency::Sol.format_base_units(U256::from(result.value))?,
            tx_count: TxCount::NotAvailable,
        })
    }
}
