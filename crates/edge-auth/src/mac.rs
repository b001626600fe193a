//! Keyed message authentication over the HMAC family.

use data_encoding::{BASE64, HEXLOWER};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;
use crate::error::{Result, TokenError};
use crate::key::{KeyDecoding, KeyMaterial};

/// How the raw digest is rendered into the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestEncoding {
    /// Lowercase hex, the standard edge token presentation.
    #[default]
    Hex,
    /// Standard padded Base64.
    Base64,
}

impl DigestEncoding {
    pub fn render(&self, digest: &[u8]) -> String {
        match self {
            DigestEncoding::Hex => HEXLOWER.encode(digest),
            DigestEncoding::Base64 => BASE64.encode(digest),
        }
    }
}

/// Compute the HMAC of `message` under `key` with the given algorithm.
///
/// Returns the raw digest; its length is always `algorithm.digest_len()`.
pub fn compute(algorithm: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Md5 => sign::<Hmac<Md5>>(key, message),
        Algorithm::Sha1 => sign::<Hmac<Sha1>>(key, message),
        Algorithm::Sha224 => sign::<Hmac<Sha224>>(key, message),
        Algorithm::Sha256 => sign::<Hmac<Sha256>>(key, message),
        Algorithm::Sha384 => sign::<Hmac<Sha384>>(key, message),
        Algorithm::Sha512 => sign::<Hmac<Sha512>>(key, message),
    }
}

/// Resolve `key` and compute the HMAC of `message`.
pub fn compute_with_key(
    algorithm: Algorithm,
    key: &KeyMaterial,
    decoding: KeyDecoding,
    message: &[u8],
) -> Result<Vec<u8>> {
    let key_bytes = key.resolve(decoding)?;
    compute(algorithm, &key_bytes, message)
}

fn sign<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|_| TokenError::InvalidKeyLength(key.len()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
