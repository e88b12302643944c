//! Asset Server — resolves the page's `/…` image references against a directory.
//!
//! Files are returned as-is. Only the path is checked, never the content.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::types::errors::AssetError;

/// A static file ready to be sent to the WebView.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Trait defining the asset server interface.
pub trait AssetServerTrait {
    fn resolve(&self, request_path: &str) -> Result<PathBuf, AssetError>;
    fn load(&self, request_path: &str) -> Result<Asset, AssetError>;
    fn root(&self) -> &Path;
}

/// Serves files from a single root directory.
pub struct AssetServer {
    root: PathBuf,
}

impl AssetServer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Decodes `%XX` escapes in a request path.
///
/// Malformed escapes are kept literally. Returns `None` when the decoded
/// bytes are not valid UTF-8.
pub fn percent_decode(input: &str) -> Option<String> {
    fn hex(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).ok()
}

/// Guesses a MIME type from the file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "html" => "text/html; charset=utf-8",
        _ => "application/octet-stream",
    }
}

impl AssetServerTrait for AssetServer {
    /// Maps a request path like `/dashboard.png` to a file under the root.
    ///
    /// The path is percent-decoded first, so `my%20photo.jpg` names
    /// `my photo.jpg`. Any `..`, root or prefix component after the leading
    /// slash is rejected.
    fn resolve(&self, request_path: &str) -> Result<PathBuf, AssetError> {
        let decoded = percent_decode(request_path)
            .ok_or_else(|| AssetError::NotFound(request_path.to_string()))?;
        let relative = decoded.trim_start_matches('/');
        if relative.is_empty() {
            return Err(AssetError::NotFound(request_path.to_string()));
        }

        let mut resolved = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(AssetError::Forbidden(request_path.to_string()));
                }
            }
        }
        Ok(resolved)
    }

    fn load(&self, request_path: &str) -> Result<Asset, AssetError> {
        let path = self.resolve(request_path)?;
        if !path.is_file() {
            return Err(AssetError::NotFound(request_path.to_string()));
        }
        let bytes = fs::read(&path)
            .map_err(|e| AssetError::IoError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), size = bytes.len(), "asset served");
        Ok(Asset {
            mime: mime_for(&path),
            bytes,
        })
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
