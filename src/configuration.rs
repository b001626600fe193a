//! YAML token profiles.
//!
//! A profile holds everything needed to build a [`TokenConfig`]. Only `key`
//! is required; every other field falls back to the library defaults.

use std::path::Path;

use edge_auth::{
    Algorithm, DigestEncoding, KeyDecoding, KeyMaterial, Lifetime, TokenConfig,
    TokenConfigBuilder, TokenError,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read token profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse token profile: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{field} must be exactly one character, got {value:?}")]
    Delimiter { field: &'static str, value: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

#[derive(Debug, Deserialize)]
pub struct TokenProfile {
    pub token_name: Option<String>,
    pub key: KeySource,
    pub algorithm: Option<String>,
    pub lifetime: Option<LifetimeSource>,
    pub field_delimiter: Option<String>,
    pub acl_delimiter: Option<String>,
    #[serde(default)]
    pub escape_early: bool,
    pub digest: Option<DigestName>,
    pub key_decoding: Option<KeyDecodingName>,
    pub salt: Option<String>,
    pub payload: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum KeySource {
    Plaintext { value: String },
    Hex { value: String },
    Base64 { value: String },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LifetimeSource {
    StartEnd { start: u64, end: u64 },
    Duration { seconds: f64 },
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestName {
    Hex,
    Base64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyDecodingName {
    Strict,
    Lenient,
}

impl From<&KeySource> for KeyMaterial {
    fn from(source: &KeySource) -> Self {
        match source {
            KeySource::Plaintext { value } => KeyMaterial::PlainText(value.clone()),
            KeySource::Hex { value } => KeyMaterial::Hex(value.clone()),
            KeySource::Base64 { value } => KeyMaterial::Base64(value.clone()),
        }
    }
}

impl From<&LifetimeSource> for Lifetime {
    fn from(source: &LifetimeSource) -> Self {
        match *source {
            LifetimeSource::StartEnd { start, end } => Lifetime::StartEnd { start, end },
            LifetimeSource::Duration { seconds } => Lifetime::Duration(seconds),
        }
    }
}

impl TokenProfile {
    /// Read and parse a profile from disk.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ProfileError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Translate the profile into a configuration builder.
    pub fn builder(&self) -> Result<TokenConfigBuilder, ProfileError> {
        let mut builder = TokenConfig::builder(KeyMaterial::from(&self.key))
            .with_escape_early(self.escape_early);

        if let Some(name) = &self.token_name {
            builder = builder.with_token_name(name.clone());
        }
        if let Some(algorithm) = &self.algorithm {
            builder = builder.with_algorithm(algorithm.parse::<Algorithm>()?);
        }
        if let Some(lifetime) = &self.lifetime {
            builder = builder.with_lifetime(lifetime.into());
        }
        if let Some(delimiter) = &self.field_delimiter {
            builder = builder.with_field_delimiter(single_char("field_delimiter", delimiter)?);
        }
        if let Some(delimiter) = &self.acl_delimiter {
            builder = builder.with_acl_delimiter(single_char("acl_delimiter", delimiter)?);
        }
        if let Some(digest) = self.digest {
            builder = builder.with_digest_encoding(match digest {
                DigestName::Hex => DigestEncoding::Hex,
                DigestName::Base64 => DigestEncoding::Base64,
            });
        }
        if let Some(decoding) = self.key_decoding {
            builder = builder.with_key_decoding(match decoding {
                KeyDecodingName::Strict => KeyDecoding::Strict,
                KeyDecodingName::Lenient => KeyDecoding::Lenient,
            });
        }
        if let Some(salt) = &self.salt {
            builder = builder.with_salt(salt.clone());
        }
        if let Some(payload) = &self.payload {
            builder = builder.with_payload(payload.clone());
        }
        if let Some(session_id) = &self.session_id {
            builder = builder.with_session_id(session_id.clone());
        }

        Ok(builder)
    }
}

fn single_char(field: &'static str, value: &str) -> Result<char, ProfileError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ProfileError::Delimiter {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_profile() {
        let yaml = r#"
token_name: hdnts
key:
  type: hex
  value: "3be07c16"
algorithm: SHA1
lifetime:
  type: startend
  start: 100
  end: 200
field_delimiter: ";"
acl_delimiter: ","
escape_early: true
digest: base64
key_decoding: lenient
salt: pepper
payload: blob
session_id: sess
"#;

        let profile = TokenProfile::parse(yaml).expect("Failed to parse profile");
        let config = profile.builder().unwrap().build().unwrap();

        assert_eq!(config.token_name(), "hdnts");
        assert_eq!(config.algorithm(), Algorithm::Sha1);
        assert_eq!(config.window().start, 100);
        assert_eq!(config.window().end, 200);
        assert_eq!(config.field_delimiter(), ';');
        assert_eq!(config.acl_delimiter(), ',');
        assert!(config.escape_early());
        assert_eq!(config.digest_encoding(), DigestEncoding::Base64);
        assert_eq!(config.salt(), Some("pepper"));
        assert_eq!(config.payload(), Some("blob"));
        assert_eq!(config.session_id(), Some("sess"));
    }

    #[test]
    fn test_minimal_profile_uses_defaults() {
        let json_data = r#"{ "key": { "type": "plaintext", "value": "secret" } }"#;

        let profile: TokenProfile =
            serde_json::from_str(json_data).expect("Failed to deserialize profile");
        let config = profile.builder().unwrap().build().unwrap();

        assert_eq!(config.token_name(), "__token__");
        assert_eq!(config.algorithm(), Algorithm::Sha256);
        assert_eq!(config.window().seconds(), 3600);
        assert_eq!(config.field_delimiter(), '~');
        assert!(!config.escape_early());
        assert_eq!(config.digest_encoding(), DigestEncoding::Hex);
    }

    #[test]
    fn test_duration_lifetime() {
        let yaml = r#"
key: { type: base64, value: "c3RhcnNoaXA=" }
lifetime: { type: duration, seconds: 900 }
"#;
        let profile = TokenProfile::parse(yaml).unwrap();
        if let Some(LifetimeSource::Duration { seconds }) = profile.lifetime {
            assert_eq!(seconds, 900.0);
        } else {
            panic!("Expected duration lifetime");
        }
    }

    #[test]
    fn test_rejects_long_delimiter() {
        let yaml = r#"
key: { type: plaintext, value: "k" }
field_delimiter: "~~"
"#;
        let profile = TokenProfile::parse(yaml).unwrap();
        let err = profile.builder().unwrap_err();
        assert!(matches!(
            err,
            ProfileError::Delimiter {
                field: "field_delimiter",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        let yaml = r#"
key: { type: plaintext, value: "k" }
algorithm: whirlpool
"#;
        let profile = TokenProfile::parse(yaml).unwrap();
        assert!(matches!(
            profile.builder(),
            Err(ProfileError::Token(TokenError::UnknownAlgorithm(_)))
        ));
    }

    #[test]
    fn test_rejects_missing_key() {
        let result = TokenProfile::parse("algorithm: sha256\n");
        assert!(matches!(result, Err(ProfileError::Yaml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = TokenProfile::load(Path::new("/nonexistent/token.yaml"));
        assert!(matches!(result, Err(ProfileError::Io(_))));
    }
}
