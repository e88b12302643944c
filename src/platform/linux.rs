// Folio platform paths for Linux
// Config: ~/.config/folio
// Data:   ~/.local/share/folio

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "folio";

fn xdg_dir(var: &str, home_fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join(APP_DIR),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            let mut path = PathBuf::from(home);
            path.extend(home_fallback);
            path.join(APP_DIR)
        }
    }
}

/// `$XDG_CONFIG_HOME/folio`, otherwise `~/.config/folio`.
pub fn get_config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// `$XDG_DATA_HOME/folio`, otherwise `~/.local/share/folio`.
pub fn get_data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}
