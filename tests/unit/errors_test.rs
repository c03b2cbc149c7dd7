use simbrowser::types::errors::{RpcError, SettingsError};

#[test]
fn test_settings_error_display() {
    assert_eq!(
        SettingsError::Io("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
}

#[test]
fn test_rpc_error_display() {
    assert_eq!(
        RpcError::UnknownMethod("nope".to_string()).to_string(),
        "unknown method: nope"
    );
    assert_eq!(RpcError::MissingParam("input").to_string(), "missing input");
}

#[test]
fn test_settings_error_converts_transparently() {
    let err: RpcError = SettingsError::InvalidValue("bad".to_string()).into();
    assert_eq!(err.to_string(), "Invalid settings value: bad");
    assert!(std::error::Error::source(&err).is_none());
}
