//! Request signing.
//!
//! Every request carries the caller's developer id and an HMAC-SHA1 of the
//! path and query (including the `devid` parameter), keyed with the shared
//! secret and hex encoded.

use std::fmt::Write;

use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::error::PtvError;

type HmacSha1 = Hmac<Sha1>;

/// Append `devid` and `signature` to a path and query.
///
/// The result is relative; the client prefixes the base URL.
pub fn sign_request(path_and_query: &str, dev_id: &str, key: &str) -> Result<String, PtvError> {
    let separator = if path_and_query.contains('?') { '&' } else { '?' };
    let raw = format!("{path_and_query}{separator}devid={dev_id}");

    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| PtvError::InvalidKey)?;
    mac.update(raw.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut signature = String::with_capacity(digest.len() * 2);
    for byte in digest.iter() {
        // Writing to a String cannot fail.
        let _ = write!(signature, "{byte:02x}");
    }

    Ok(format!("{raw}&signature={signature}"))
}
