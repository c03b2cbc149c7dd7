use thiserror::Error;

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    Io(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === RpcError ===

/// Errors produced while decoding or dispatching an RPC request.
///
/// These belong to the protocol layer only; navigation itself never fails.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    #[error("missing {0}")]
    MissingParam(&'static str),
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
