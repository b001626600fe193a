//! Error types for token configuration and generation.

use thiserror::Error;

/// Errors that can occur while configuring or minting a token.
#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    /// The resolved validity window is empty or inverted.
    #[error("Invalid lifetime: end ({end}) must be after start ({start})")]
    InvalidLifetime { start: u64, end: u64 },

    /// Duration is negative or not a finite number.
    #[error("Invalid duration: {0}")]
    InvalidDuration(f64),

    /// Key material resolved to zero bytes.
    #[error("Missing key material")]
    MissingKey,

    /// Hex key has odd length or contains non-hex digits
    #[error("Invalid hex key: {0}")]
    InvalidHexKey(String),

    /// Base64 decoding of the key failed
    #[error("Invalid base64 key")]
    InvalidBase64Key,

    /// The MAC primitive rejected the key length.
    #[error("Invalid key length: {0}")]
    InvalidKeyLength(usize),

    /// Neither a URL nor an ACL path was supplied.
    #[error("Missing resource: a URL or ACL path is required")]
    MissingResource,

    /// Algorithm name is not one of md5, sha1, sha224, sha256, sha384, sha512
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl TokenError {
    /// Whether this error is raised while building a configuration rather
    /// than while minting a token.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, TokenError::MissingResource)
    }

    /// Whether the key material failed to decode.
    pub fn is_key_decode_error(&self) -> bool {
        matches!(
            self,
            TokenError::InvalidHexKey(_) | TokenError::InvalidBase64Key
        )
    }
}

/// Result type alias for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
