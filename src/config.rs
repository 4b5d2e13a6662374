use std::env;
use std::path::PathBuf;

pub const DEFAULT_BLOCKCYPHER_URL: &str = "https://api.blockcypher.com/v1/btc/main";
pub const DEFAULT_SOLANA_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_OUTPUT_PATH: &str = "address_data.csv";

/// Endpoints and output location resolved from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint. Ethereum queries fail when unset.
    pub eth_rpc_url: Option<String>,
    pub btc_api_url: String,
    pub solana_rpc_url: String,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eth_rpc_url: None,
            btc_api_url: DEFAULT_BLOCKCYPHER_URL.to_string(),
            solana_rpc_url: DEFAULT_SOLANA_RPC_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let eth_rpc_url = Self::var("INFURA_URL").or_else(|| Self::var("ETH_RPC_URL"));

        let btc_api_url = Self::var("BLOCKCYPHER_URL")
            .map(|url| Self::trim_base_url(&url))
            .unwrap_or_else(|| DEFAULT_BLOCKCYPHER_URL.to_string());

        let solana_rpc_url = Self::var("SOLANA_RPC_URL")
            .unwrap_or_else(|| DEFAULT_SOLANA_RPC_URL.to_string());

        let output_path = Self::var("OUTPUT_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        if eth_rpc_url.is_none() {
            tracing::debug!("INFURA_URL not set, Ethereum queries are disabled");
        }

        Config {
            eth_rpc_url,
            btc_api_url,
            solana_rpc_url,
            output_path,
        }
    }

    // Empty values count as unset
    fn var(key: &str) -> Option<String> {
        env::var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn trim_base_url(url: &str) -> String {
        url.trim_end_matches('/').to_string()
    }
}
