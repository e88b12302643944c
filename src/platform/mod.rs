// Folio platform abstraction
// Platform-specific config and data directories for Windows, macOS, and Linux,
// selected at compile time with `cfg(target_os)`.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Folio.
///
/// - **Linux**: `~/.config/folio` (or `$XDG_CONFIG_HOME/folio`)
/// - **macOS**: `~/Library/Application Support/Folio`
/// - **Windows**: `%APPDATA%/Folio`
pub fn get_config_dir() -> PathBuf {
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
}

/// Returns the platform-specific data directory for Folio.
///
/// - **Linux**: `~/.local/share/folio` (or `$XDG_DATA_HOME/folio`)
/// - **macOS**: `~/Library/Application Support/Folio`
/// - **Windows**: `%LOCALAPPDATA%/Folio`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
