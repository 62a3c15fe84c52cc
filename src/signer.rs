use crate::error::{Error, Result};
use hmac::{Hmac, Mac};
use sha2::Digest as _;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const DIGEST_SIZE: usize = 32;

/// Raw SHA-256 / HMAC-SHA256 output. Binary, not text: any byte value
/// (including `0`) may appear.
pub type Digest = [u8; DIGEST_SIZE];

/// HMAC-SHA256 of `message` keyed with `key`.
///
/// Both inputs may be empty. HMAC accepts keys of any length, so the error
/// path only reports a failing primitive.
pub fn hmac_sha256(message: &[u8], key: &[u8]) -> Result<Digest> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| Error::InvalidKey)?;
    mac.update(message);
    let code = mac.finalize().into_bytes();

    let mut digest = [0u8; DIGEST_SIZE];
    digest.copy_from_slice(&code);
    Ok(digest)
}

/// SHA-256 of a request body, for the `Digest: SHA-256=...` header.
pub fn sha256(body: &[u8]) -> Digest {
    let hash = Sha256::digest(body);
    let mut digest = [0u8; DIGEST_SIZE];
    digest.copy_from_slice(&hash);
    digest
}
