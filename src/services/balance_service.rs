use std::path::{ Path, PathBuf };
use std::sync::Arc;

use crate::error::Result;
use crate::output;
use crate::providers::BalanceRecord;
use crate::rpc::RpcManager;

pub struct BalanceService {
    rpc_manager: Arc<RpcManager>,
    output_path: PathBuf,
}

impl BalanceService {
    pub fn new(rpc_manager: Arc<RpcManager>, output_path: PathBuf) -> Self {
        Self {
            rpc_manager,
            output_path,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Looks up the balance for `address` and writes it to the output CSV.
    pub async fn export(&self, currency: &str, address: &str) -> Result<BalanceRecord> {
        let record = self.rpc_manager.resolve(currency, address).await?;

        output::write_record(&self.output_path, &record)?;

        tracing::info!(
            currency = %record.currency,
            address = %record.address,
            balance = %record.balance,
            "Exported balance to {}",
            self.output_path.display()
        );

        Ok(record)
    }
}
