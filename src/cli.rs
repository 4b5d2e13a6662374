//! Command-line entry point: argument parsing, execution and exit-code mapping.

use std::sync::Arc;

use crate::config::Config;
use crate::enums::Currency;
use crate::error::AppError;
use crate::rpc::RpcManager;
use crate::services::BalanceService;

/// Exit code for a wrong argument count.
pub const USAGE_EXIT_CODE: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub currency: String,
    pub address: String,
}

impl CliArgs {
    /// Expects exactly `<currency> <address>`, program name already stripped.
    pub fn parse(args: &[String]) -> Option<Self> {
        match args {
            [currency, address] =>
                Some(Self {
                    currency: currency.to_uppercase(),
                    address: address.trim().to_string(),
                }),
            _ => None,
        }
    }
}

pub fn usage() -> String {
    let supported: Vec<&str> = Currency::all()
        .iter()
        .map(|c| c.as_str())
        .collect();

    format!(
        "Usage: balance-exporter <currency> <address>\nSupported currencies: {}",
        supported.join(", ")
    )
}

/// Runs one export and returns the process exit code.
///
/// Configuration is only loaded once the arguments are known to be well formed.
pub async fn run(args: &[String]) -> u8 {
    run_with(args, Config::from_env).await
}

/// Like [`run`], with the configuration source supplied by the caller.
pub async fn run_with<F>(args: &[String], load_config: F) -> u8 where F: FnOnce() -> Config {
    let Some(cli) = CliArgs::parse(args) else {
        println!("{}", usage());
        return USAGE_EXIT_CODE;
    };

    execute(cli, &load_config()).await
}

pub async fn execute(cli: CliArgs, config: &Config) -> u8 {
    let manager = RpcManager::new(config);
    let service = BalanceService::new(Arc::new(manager), config.output_path.clone());

    match service.export(&cli.currency, &cli.address).await {
        Ok(record) => {
            println!("✅ Data written to {}:\n{}", service.output_path().display(), record);
            0
        }
        Err(e) => report_error(&e),
    }
}

fn report_error(err: &AppError) -> u8 {
    tracing::error!(code = err.code(), "{}", err);
    println!("❌ Error: {}", err);
    err.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::path::PathBuf;
    use wiremock::matchers::{ method, path };
    use wiremock::{ Mock, MockServer, ResponseTemplate };

    fn args(values: &[&str]) -> Vec<String> {
        values
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_parse_two_args() {
        let cli = CliArgs::parse(&args(&["eth", "  0xabc  "])).unwrap();
        assert_eq!(cli.currency, "ETH");
        assert_eq!(cli.address, "0xabc");
    }

    #[test]
    fn test_parse_rejects_wrong_count() {
        assert!(CliArgs::parse(&args(&[])).is_none());
        assert!(CliArgs::parse(&args(&["BTC"])).is_none());
        assert!(CliArgs::parse(&args(&["BTC", "addr", "extra"])).is_none());
    }

    #[test]
    fn test_usage_lists_currencies() {
        assert!(usage().contains("ETH, BTC, SOL"));
    }

    fn temp_output(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(
            format!("balance_exporter_cli_{}_{}.csv", std::process::id(), name)
        );
        std::fs::remove_file(&path).ok();
        path
    }

    #[tokio::test]
    async fn test_wrong_arg_count_exits_with_usage_code() {
        let output_path = temp_output("usage");
        let config_loaded = Cell::new(false);

        for bad in [args(&[]), args(&["SOL"]), args(&["SOL", "a", "b"])] {
            let code = run_with(&bad, || {
                config_loaded.set(true);
                Config { output_path: output_path.clone(), ..Config::default() }
            }).await;
            assert_eq!(code, USAGE_EXIT_CODE);
        }

        assert!(!config_loaded.get());
        assert!(!output_path.exists());
    }

    #[tokio::test]
    async fn test_unsupported_currency_exit_code() {
        let output_path = temp_output("doge");
        let config = Config { output_path: output_path.clone(), ..Config::default() };

        let cli = CliArgs::parse(&args(&["DOGE", "addr"])).unwrap();
        let code = execute(cli, &config).await;

        assert_eq!(code, 3);
        assert!(!output_path.exists());
    }

    #[tokio::test]
    async fn test_missing_eth_endpoint_exit_code() {
        let config = Config::default();
        let cli = CliArgs::parse(&args(&["ETH", "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"])).unwrap();

        assert_eq!(execute(cli, &config).await, 6);
    }

    #[tokio::test]
    async fn test_bad_eth_url_leaves_other_currencies_working() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/addrs/1BoatSLRHtKNngkdXEeobR76b53LETtpyT/balance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "balance": 150000000u64, "n_tx": 42 })))
            .mount(&server).await;

        let output_path = temp_output("bad_eth_url");
        let config = Config {
            eth_rpc_url: Some("not a url".to_string()),
            btc_api_url: server.uri(),
            output_path: output_path.clone(),
            ..Config::default()
        };

        let doge = CliArgs::parse(&args(&["DOGE", "addr"])).unwrap();
        assert_eq!(execute(doge, &config).await, 3);

        let btc = CliArgs::parse(&args(&["BTC", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"])).unwrap();
        assert_eq!(execute(btc, &config).await, 0);

        let contents = std::fs::read_to_string(&output_path).unwrap();
        std::fs::remove_file(&output_path).ok();
        assert!(contents.ends_with("BTC,1BoatSLRHtKNngkdXEeobR76b53LETtpyT,1.5,42\n"));

        let eth = CliArgs::parse(&args(&["ETH", "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"])).unwrap();
        assert_eq!(execute(eth, &config).await, 6);
    }

    #[tokio::test]
    async fn test_invalid_eth_address_exit_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server).await;

        let output_path = temp_output("invalid_address");
        let config = Config {
            eth_rpc_url: Some(server.uri()),
            output_path: output_path.clone(),
            ..Config::default()
        };

        let cli = CliArgs::parse(&args(&["ETH", "0x123"])).unwrap();

        assert_eq!(execute(cli, &config).await, 2);
        assert!(!output_path.exists());
    }

    #[tokio::test]
    async fn test_upstream_failure_exit_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Invalid address" })))
            .mount(&server).await;

        let output_path = temp_output("upstream");
        let config = Config {
            btc_api_url: server.uri(),
            output_path: output_path.clone(),
            ..Config::default()
        };

        let cli = CliArgs::parse(&args(&["BTC", "garbage"])).unwrap();

        assert_eq!(execute(cli, &config).await, 4);
        assert!(!output_path.exists());
    }

    #[tokio::test]
    async fn test_unwritable_output_exit_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "context": { "slot": 1 }, "value": 2500000000u64 }
            })))
            .mount(&server).await;

        let config = Config {
            solana_rpc_url: server.uri(),
            output_path: temp_output("missing_dir").join("nested").join("address_data.csv"),
            ..Config::default()
        };

        let cli = CliArgs::parse(&args(&["SOL", "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM"])).unwrap();

        assert_eq!(execute(cli, &config).await, 5);
    }
}
