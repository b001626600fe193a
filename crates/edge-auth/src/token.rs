//! Token assembly.
//!
//! A token is `st=..~exp=..[~acl=..][~id=..][~data=..]~hmac=<digest>`. The
//! signed message is the same field list, extended by `url=` for URL tokens
//! and `salt=` when a salt is configured. Neither of those two fields ever
//! appears in the emitted token.

use crate::config::TokenConfig;
use crate::error::{Result, TokenError};
use crate::escape::escape_path;
use crate::mac;

mod field {
    pub const START: &str = "st";
    pub const END: &str = "exp";
    pub const ACL: &str = "acl";
    pub const SESSION_ID: &str = "id";
    pub const PAYLOAD: &str = "data";
    pub const URL: &str = "url";
    pub const SALT: &str = "salt";
    pub const HMAC: &str = "hmac";
}

/// The resource a token grants access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    paths: Vec<String>,
    is_url: bool,
}

impl TokenRequest {
    /// A request for a URL or an ACL path, selected by `is_url`.
    pub fn new(path: impl Into<String>, is_url: bool) -> Self {
        Self {
            paths: vec![path.into()],
            is_url,
        }
    }

    /// Token bound to a single URL.
    pub fn url(path: impl Into<String>) -> Self {
        Self::new(path, true)
    }

    /// Token bound to an ACL path (wildcards allowed, e.g. `/videos/*`).
    pub fn acl(path: impl Into<String>) -> Self {
        Self::new(path, false)
    }

    /// Token bound to several ACL paths, joined with the ACL delimiter.
    pub fn acl_list<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            is_url: false,
        }
    }

    pub fn is_url(&self) -> bool {
        self.is_url
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

/// The retained token body and the message that gets signed.
struct Assembled {
    prefix: String,
    message: String,
}

impl TokenConfig {
    /// Mint a token for the given request.
    pub fn generate_token(&self, request: &TokenRequest) -> Result<String> {
        let assembled = self.assemble(request)?;
        let digest = mac::compute(
            self.algorithm(),
            self.key_bytes(),
            assembled.message.as_bytes(),
        )?;

        let token = format!(
            "{}{}{}={}",
            assembled.prefix,
            self.field_delimiter(),
            field::HMAC,
            self.digest_encoding().render(&digest)
        );

        log::debug!(
            "minted {} token ({}) valid {}..{}: {}",
            if request.is_url() { "url" } else { "acl" },
            self.algorithm(),
            self.window().start,
            self.window().end,
            assembled.prefix
        );

        Ok(token)
    }

    /// Mint a token bound to a single URL.
    pub fn generate_url_token(&self, url: &str) -> Result<String> {
        self.generate_token(&TokenRequest::url(url))
    }

    /// Mint a token bound to an ACL path.
    pub fn generate_acl_token(&self, acl: &str) -> Result<String> {
        self.generate_token(&TokenRequest::acl(acl))
    }

    fn assemble(&self, request: &TokenRequest) -> Result<Assembled> {
        let resource = self.encode_resource(request)?;
        let window = self.window();

        let mut fields = vec![
            format!("{}={}", field::START, window.start),
            format!("{}={}", field::END, window.end),
        ];
        if !request.is_url() {
            fields.push(format!("{}={}", field::ACL, resource));
        }
        if let Some(session_id) = self.session_id() {
            fields.push(format!("{}={}", field::SESSION_ID, session_id));
        }
        if let Some(payload) = self.payload() {
            fields.push(format!("{}={}", field::PAYLOAD, payload));
        }

        let delimiter = self.field_delimiter().to_string();
        let prefix = fields.join(&delimiter);

        // Signed only; never part of the emitted token.
        if request.is_url() {
            fields.push(format!("{}={}", field::URL, resource));
        }
        if let Some(salt) = self.salt() {
            fields.push(format!("{}={}", field::SALT, salt));
        }

        Ok(Assembled {
            prefix,
            message: fields.join(&delimiter),
        })
    }

    fn encode_resource(&self, request: &TokenRequest) -> Result<String> {
        let paths: Vec<String> = request
            .paths()
            .iter()
            .filter(|path| !path.is_empty())
            .map(|path| {
                if self.escape_early() {
                    escape_path(path)
                } else {
                    path.clone()
                }
            })
            .collect();

        if paths.is_empty() {
            return Err(TokenError::MissingResource);
        }

        Ok(paths.join(&self.acl_delimiter().to_string()))
    }
}
