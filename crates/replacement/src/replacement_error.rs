// ---------------------------------------------------------------------------
// ReplacementError: configuration and classification failures
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised while configuring or running building replacement.
///
/// `MissingModel`, `InvalidScale`, `Io` and `Parse` are startup errors and
/// stop the plugin from registering any listener. `UnsupportedCategory` is
/// reported per building and never aborts anything.
#[derive(Debug)]
pub enum ReplacementError {
    /// A mandatory substitute model path is absent or empty.
    MissingModel { field: String },
    /// A configured scale is not a finite positive number.
    InvalidScale { field: String, scale: f32 },
    /// The host reported a usage label outside the known category set.
    UnsupportedCategory(String),
    /// The configuration file could not be read.
    Io(std::io::Error),
    /// The configuration file is not valid JSON for `ReplacementConfig`.
    Parse(String),
}

impl fmt::Display for ReplacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementError::MissingModel { field } => write!(
                f,
                "Missing substitute model: set `{field}` to a scene path in the replacement config"
            ),
            ReplacementError::InvalidScale { field, scale } => write!(
                f,
                "Invalid scale {scale} for `{field}`: must be a finite number above 0"
            ),
            ReplacementError::UnsupportedCategory(label) => {
                write!(f, "Building category '{label}' is not supported yet")
            }
            ReplacementError::Io(e) => write!(f, "I/O error reading replacement config: {e}"),
            ReplacementError::Parse(msg) => write!(f, "Invalid replacement config: {msg}"),
        }
    }
}

impl std::error::Error for ReplacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplacementError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReplacementError {
    fn from(e: std::io::Error) -> Self {
        ReplacementError::Io(e)
    }
}

impl From<serde_json::Error> for ReplacementError {
    fn from(e: serde_json::Error) -> Self {
        ReplacementError::Parse(e.to_string())
    }
}
