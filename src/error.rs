use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid address: {0}")] InvalidAddress(String),

    #[error("Unsupported currency: {0}. Supported: ETH, BTC, SOL")] UnsupportedCurrency(String),

    #[error("Upstream error: {0}")] Upstream(String),

    #[error("IO error: {0}")] Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")] Config(String),
}

impl AppError {
    /// Stable machine-readable code, used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidAddress(_) => "INVALID_ADDRESS",
            AppError::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Process exit code. `1` is reserved for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidAddress(_) => 2,
            AppError::UnsupportedCurrency(_) => 3,
            AppError::Upstream(_) => 4,
            AppError::Io(_) => 5,
            AppError::Config(_) => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
