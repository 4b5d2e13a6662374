pub mod bitcoin;
pub mod evm;
pub mod solana;

pub use bitcoin::BitcoinProvider;
pub use evm::EvmProvider;
pub use solana::SolanaProvider;
