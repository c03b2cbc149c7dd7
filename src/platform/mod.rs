// Platform config directory lookup.
//
// Uses `cfg(target_os)` to select the platform-specific default at compile
// time. `SIMBROWSER_CONFIG_DIR` overrides it everywhere.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "SIMBROWSER_CONFIG_DIR";

/// Returns the configuration directory for simbrowser.
///
/// - **Override**: `$SIMBROWSER_CONFIG_DIR`
/// - **Linux**: `$XDG_CONFIG_HOME/simbrowser` or `~/.config/simbrowser`
/// - **macOS**: `~/Library/Application Support/Simbrowser`
/// - **Windows**: `%APPDATA%/Simbrowser`
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    default_config_dir()
}

fn default_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".simbrowser")
    }
}
