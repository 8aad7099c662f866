use dropdown::ConfigError;
use thiserror::Error;

/// Errors that end the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("invalid dropdown configuration: {0}")]
    Config(#[from] ConfigError),
}
