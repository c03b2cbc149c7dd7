use std::env;
use std::path::PathBuf;

/// `$XDG_CONFIG_HOME/simbrowser` if set, otherwise `~/.config/simbrowser`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("simbrowser"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("simbrowser")
        }
    }
}
