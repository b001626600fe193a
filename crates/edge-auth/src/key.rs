//! Key material normalization.
//!
//! Secrets arrive as raw text, a hex string or a Base64 string. All three are
//! resolved to bytes once, when the token configuration is built, and the
//! bytes are wiped from memory when the configuration is dropped.

use data_encoding::{BASE64, HEXLOWER_PERMISSIVE};
use zeroize::Zeroizing;

use crate::error::{Result, TokenError};

/// Secret used to key the HMAC.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// UTF-8 bytes of the string are the key.
    PlainText(String),
    /// Even-length hexadecimal string, two digits per byte.
    Hex(String),
    /// Standard (padded) Base64.
    Base64(String),
}

/// How malformed hex or Base64 key material is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyDecoding {
    /// Reject malformed key material.
    #[default]
    Strict,
    /// Skip undecodable hex pairs and treat undecodable Base64 as an empty
    /// key, logging a warning for each.
    Lenient,
}

impl KeyMaterial {
    pub fn kind(&self) -> &'static str {
        match self {
            KeyMaterial::PlainText(_) => "plaintext",
            KeyMaterial::Hex(_) => "hex",
            KeyMaterial::Base64(_) => "base64",
        }
    }

    /// Resolve the key material to raw bytes.
    pub fn resolve(&self, decoding: KeyDecoding) -> Result<Zeroizing<Vec<u8>>> {
        let bytes = match self {
            KeyMaterial::PlainText(text) => Zeroizing::new(text.as_bytes().to_vec()),
            KeyMaterial::Hex(hex) => match decoding {
                KeyDecoding::Strict => HEXLOWER_PERMISSIVE
                    .decode(hex.as_bytes())
                    .map(Zeroizing::new)
                    .map_err(|e| TokenError::InvalidHexKey(e.to_string()))?,
                KeyDecoding::Lenient => decode_hex_lenient(hex),
            },
            KeyMaterial::Base64(encoded) => match BASE64.decode(encoded.as_bytes()) {
                Ok(bytes) => Zeroizing::new(bytes),
                Err(_) if decoding == KeyDecoding::Lenient => {
                    log::warn!("base64 key material failed to decode, using an empty key");
                    Zeroizing::new(Vec::new())
                }
                Err(_) => return Err(TokenError::InvalidBase64Key),
            },
        };

        if bytes.is_empty() {
            match decoding {
                KeyDecoding::Strict => return Err(TokenError::MissingKey),
                KeyDecoding::Lenient => {
                    log::warn!("{} key material resolved to an empty key", self.kind())
                }
            }
        }

        Ok(bytes)
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyMaterial::{}(<redacted>)", self.kind())
    }
}

/// Decode two characters at a time, dropping any group that is not valid hex.
/// A trailing odd character is decoded on its own.
fn decode_hex_lenient(hex: &str) -> Zeroizing<Vec<u8>> {
    let chars: Vec<char> = hex.chars().collect();
    let mut bytes = Zeroizing::new(Vec::with_capacity(chars.len() / 2 + 1));

    for (index, group) in chars.chunks(2).enumerate() {
        let parsed = group.iter().try_fold(0u8, |acc, c| {
            c.to_digit(16).map(|digit| (acc << 4) | digit as u8)
        });
        match parsed {
            Some(byte) => bytes.push(byte),
            None => log::warn!("skipping malformed hex key group at offset {}", index * 2),
        }
    }

    bytes
}
