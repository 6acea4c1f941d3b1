use std::fmt;

// === GalleryError ===

/// Errors related to fetching gallery data.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryError {
    /// The request never produced a response (connection refused, timeout, ...).
    Network(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response body was not the expected JSON shape.
    Decode(String),
    /// The requested tag or image does not exist.
    NotFound(String),
    /// The configured base URL cannot be used to build requests.
    InvalidEndpoint(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Network(msg) => write!(f, "Gallery network error: {}", msg),
            GalleryError::Status(code) => write!(f, "Gallery server returned status {}", code),
            GalleryError::Decode(msg) => write!(f, "Gallery response malformed: {}", msg),
            GalleryError::NotFound(what) => write!(f, "Gallery item not found: {}", what),
            GalleryError::InvalidEndpoint(msg) => {
                write!(f, "Invalid gallery endpoint: {}", msg)
            }
        }
    }
}

impl std::error::Error for GalleryError {}

// === CatalogError ===

/// Errors related to loading a gallery descriptor file.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The descriptor file could not be read.
    Io(String),
    /// The descriptor contents do not follow the three-line record format.
    Malformed { line: usize, reason: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(msg) => write!(f, "Catalog I/O error: {}", msg),
            CatalogError::Malformed { line, reason } => {
                write!(f, "Malformed catalog at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

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
