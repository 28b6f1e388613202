use thiserror::Error;

/// Rejections raised by the strict withdrawal rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("Withdrawal is greater than current balance.")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Overdraft limit exceeded.")]
    OverdraftExceeded {
        requested: f64,
        available: f64,
        overdraft_limit: f64,
    },
}

/// Rejected demo options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Failures that abort the demo run.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
