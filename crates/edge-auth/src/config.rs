//! Configuration for token generation.

use std::time::SystemTime;

use zeroize::Zeroizing;

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::key::{KeyDecoding, KeyMaterial};
use crate::lifetime::{Lifetime, Window};
use crate::mac::DigestEncoding;

/// Default query/cookie parameter name for the token.
pub const DEFAULT_TOKEN_NAME: &str = "__token__";
/// Default separator between token fields.
pub const DEFAULT_FIELD_DELIMITER: char = '~';
/// Default separator between ACL paths.
pub const DEFAULT_ACL_DELIMITER: char = '!';

/// Immutable token configuration.
///
/// The key is decoded and the validity window stamped when the configuration
/// is built. Every token minted from the same configuration shares that
/// window, so a `Lifetime::Duration` is measured from `build()`, not from
/// each call.
#[derive(Clone)]
pub struct TokenConfig {
    token_name: String,
    key: Zeroizing<Vec<u8>>,
    key_kind: &'static str,
    algorithm: Algorithm,
    window: Window,
    field_delimiter: char,
    acl_delimiter: char,
    escape_early: bool,
    salt: Option<String>,
    payload: Option<String>,
    session_id: Option<String>,
    digest_encoding: DigestEncoding,
}

impl TokenConfig {
    /// Start building a configuration around the given secret.
    pub fn builder(key: KeyMaterial) -> TokenConfigBuilder {
        TokenConfigBuilder::new(key)
    }

    pub fn token_name(&self) -> &str {
        &self.token_name
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Validity window shared by every token from this configuration.
    pub fn window(&self) -> Window {
        self.window
    }

    pub fn field_delimiter(&self) -> char {
        self.field_delimiter
    }

    pub fn acl_delimiter(&self) -> char {
        self.acl_delimiter
    }

    pub fn escape_early(&self) -> bool {
        self.escape_early
    }

    pub fn salt(&self) -> Option<&str> {
        self.salt.as_deref()
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn digest_encoding(&self) -> DigestEncoding {
        self.digest_encoding
    }

    pub(crate) fn key_bytes(&self) -> &[u8] {
        &self.key
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("token_name", &self.token_name)
            .field("key", &format_args!("<{} bytes, {}>", self.key.len(), self.key_kind))
            .field("algorithm", &self.algorithm)
            .field("window", &self.window)
            .field("field_delimiter", &self.field_delimiter)
            .field("acl_delimiter", &self.acl_delimiter)
            .field("escape_early", &self.escape_early)
            .field("salt", &self.salt.as_ref().map(|_| "<redacted>"))
            .field("payload", &self.payload)
            .field("session_id", &self.session_id)
            .field("digest_encoding", &self.digest_encoding)
            .finish()
    }
}

/// Builder for [`TokenConfig`].
#[derive(Clone)]
pub struct TokenConfigBuilder {
    token_name: String,
    key: KeyMaterial,
    key_decoding: KeyDecoding,
    algorithm: Algorithm,
    lifetime: Lifetime,
    field_delimiter: char,
    acl_delimiter: char,
    escape_early: bool,
    salt: Option<String>,
    payload: Option<String>,
    session_id: Option<String>,
    digest_encoding: DigestEncoding,
}

impl std::fmt::Debug for TokenConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfigBuilder")
            .field("token_name", &self.token_name)
            .field("key", &self.key)
            .field("key_decoding", &self.key_decoding)
            .field("algorithm", &self.algorithm)
            .field("lifetime", &self.lifetime)
            .field("field_delimiter", &self.field_delimiter)
            .field("acl_delimiter", &self.acl_delimiter)
            .field("escape_early", &self.escape_early)
            .field("salt", &self.salt.as_ref().map(|_| "<redacted>"))
            .field("payload", &self.payload)
            .field("session_id", &self.session_id)
            .field("digest_encoding", &self.digest_encoding)
            .finish()
    }
}

impl TokenConfigBuilder {
    /// Create a builder with the reference defaults: `__token__`, SHA-256,
    /// one hour, `~` and `!` delimiters, no early escaping, hex digest.
    pub fn new(key: KeyMaterial) -> Self {
        Self {
            token_name: DEFAULT_TOKEN_NAME.to_string(),
            key,
            key_decoding: KeyDecoding::default(),
            algorithm: Algorithm::default(),
            lifetime: Lifetime::default(),
            field_delimiter: DEFAULT_FIELD_DELIMITER,
            acl_delimiter: DEFAULT_ACL_DELIMITER,
            escape_early: false,
            salt: None,
            payload: None,
            session_id: None,
            digest_encoding: DigestEncoding::default(),
        }
    }

    pub fn with_token_name(mut self, name: impl Into<String>) -> Self {
        self.token_name = name.into();
        self
    }

    pub fn with_key_decoding(mut self, decoding: KeyDecoding) -> Self {
        self.key_decoding = decoding;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_field_delimiter(mut self, delimiter: char) -> Self {
        self.field_delimiter = delimiter;
        self
    }

    pub fn with_acl_delimiter(mut self, delimiter: char) -> Self {
        self.acl_delimiter = delimiter;
        self
    }

    /// Percent-encode resource paths before they are signed.
    pub fn with_escape_early(mut self, escape_early: bool) -> Self {
        self.escape_early = escape_early;
        self
    }

    /// Signed but never emitted in the token body.
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_digest_encoding(mut self, encoding: DigestEncoding) -> Self {
        self.digest_encoding = encoding;
        self
    }

    /// Build the configuration, stamping the window with the current time.
    pub fn build(self) -> Result<TokenConfig> {
        self.build_at(SystemTime::now())
    }

    /// Build the configuration against a provided clock reading.
    pub fn build_at(self, now: SystemTime) -> Result<TokenConfig> {
        let window = self.lifetime.resolve(now)?;
        let key = self.key.resolve(self.key_decoding)?;

        Ok(TokenConfig {
            token_name: self.token_name,
            key,
            key_kind: self.key.kind(),
            algorithm: self.algorithm,
            window,
            field_delimiter: self.field_delimiter,
            acl_delimiter: self.acl_delimiter,
            escape_early: self.escape_early,
            salt: self.salt,
            payload: self.payload,
            session_id: self.session_id,
            digest_encoding: self.digest_encoding,
        })
    }
}
