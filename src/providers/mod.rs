pub mod chain_provider;

pub use chain_provider::{ BalanceRecord, ChainProvider, TxCount, TX_COUNT_NOT_AVAILABLE };
