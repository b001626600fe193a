//! Edge authorization token generation.
//!
//! This crate mints the delimiter-separated, HMAC-protected access tokens
//! that CDN edge servers check before serving a URL or a path prefix:
//! - Normalizing key material given as text, hex or Base64
//! - Stamping a validity window once per configuration
//! - Assembling the canonical signed string and rendering the digest
//!
//! # Token Format
//!
//! `st=<start>~exp=<end>[~acl=<path>][~id=<session>][~data=<payload>]~hmac=<digest>`
//!
//! The signed message additionally carries `url=<path>` for URL tokens and
//! `salt=<salt>` when a salt is configured.
//!
//! # Example
//!
//! ```rust
//! use edge_auth::{Algorithm, KeyMaterial, Lifetime, TokenConfig, TokenRequest};
//!
//! let config = TokenConfig::builder(KeyMaterial::Hex("3be07c165a570b342d3cdfe836755ae4".into()))
//!     .with_algorithm(Algorithm::Sha256)
//!     .with_lifetime(Lifetime::StartEnd { start: 1_700_000_000, end: 1_700_003_600 })
//!     .build()
//!     .unwrap();
//!
//! let token = config.generate_token(&TokenRequest::acl("/videos/*")).unwrap();
//! assert!(token.starts_with("st=1700000000~exp=1700003600~acl=/videos/*~hmac="));
//! ```

mod algorithm;
mod config;
mod error;
mod escape;
mod key;
mod lifetime;
mod mac;
mod token;

// Public re-exports
pub use algorithm::Algorithm;
pub use config::{
    DEFAULT_ACL_DELIMITER, DEFAULT_FIELD_DELIMITER, DEFAULT_TOKEN_NAME, TokenConfig,
    TokenConfigBuilder,
};
pub use error::{Result, TokenError};
pub use escape::escape_path;
pub use key::{KeyDecoding, KeyMaterial};
pub use lifetime::{Lifetime, Window};
pub use mac::{DigestEncoding, compute, compute_with_key};
pub use token::TokenRequest;
