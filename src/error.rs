//! Error types for MojiKit

use thiserror::Error;

/// Main error type for text utility operations
#[derive(Error, Debug)]
pub enum MojiKitError {
    /// Password policy enables no character class, so the alphabet is empty
    #[error("Invalid password policy: no character class enabled")]
    InvalidPolicy,

    /// Localization error
    #[error("Localization error: {0}")]
    LocalizationError(String),
}

/// Result type alias for MojiKit operations
pub type Result<T> = std::result::Result<T, MojiKitError>;
