pub mod provider;

pub use provider::{ parse_address, EvmProvider };
