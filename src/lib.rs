pub mod cli;
pub mod config;
pub mod enums;
pub mod error;
pub mod providers;
pub mod chains;
pub mod rpc;
pub mod services;
pub mod output;

pub use config::Config;
pub use enums::Currency;
pub use error::{ AppError, Result };
pub use providers::{ BalanceRecord, ChainProvider, TxCount };
