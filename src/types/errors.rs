use std::fmt;

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === AssetError ===

/// Errors related to serving static assets.
#[derive(Debug)]
pub enum AssetError {
    /// The requested path escapes the asset directory.
    Forbidden(String),
    /// No file exists at the requested path.
    NotFound(String),
    /// The file exists but could not be read.
    IoError(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Forbidden(path) => write!(f, "Asset path forbidden: {}", path),
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path),
            AssetError::IoError(msg) => write!(f, "Asset I/O error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

impl AssetError {
    /// HTTP status code used when answering a custom-protocol request.
    pub fn status_code(&self) -> u16 {
        match self {
            AssetError::Forbidden(_) => 403,
            AssetError::NotFound(_) => 404,
            AssetError::IoError(_) => 500,
        }
    }
}

// === IpcError ===

/// Errors decoding messages posted by the page bridge script.
#[derive(Debug)]
pub enum IpcError {
    /// The message body is not valid JSON.
    Malformed(String),
    /// The message has no `cmd` field.
    MissingCommand,
    /// A required field is missing or has the wrong type.
    InvalidField(String),
}

impl fmt::Display for IpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpcError::Malformed(msg) => write!(f, "Malformed IPC message: {}", msg),
            IpcError::MissingCommand => write!(f, "IPC message has no command"),
            IpcError::InvalidField(field) => write!(f, "Invalid IPC field: {}", field),
        }
    }
}

impl std::error::Error for IpcError {}

// === AppError ===

/// Errors raised while bringing the application up.
#[derive(Debug)]
pub enum AppError {
    /// Settings could not be loaded.
    Settings(SettingsError),
    /// The native window or WebView could not be created.
    Window(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Settings(e) => write!(f, "Failed to load settings: {}", e),
            AppError::Window(msg) => write!(f, "Window error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Settings(e) => Some(e),
            AppError::Window(_) => None,
        }
    }
}

impl From<SettingsError> for AppError {
    fn from(e: SettingsError) -> Self {
        AppError::Settings(e)
    }
}
