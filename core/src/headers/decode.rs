//! src/headers/decode.rs
//!
//! Header decoding entry points.
//!
//! Design notes:
//! - Token → bytes → version byte → fixed prefix → version-specific tail.
//! - The version byte is read once and selects one layout for the whole decode.
//! - Any failure aborts the decode; nothing partially decoded escapes.

use log::{debug, trace};

use crate::headers::fields::unpack_fixed;
use crate::headers::strategy::Decoded;
use crate::headers::token::decode_token_bytes;
use crate::headers::types::{HeaderFormatError, HeaderVersion};
use crate::types::DecodeOptions;
use crate::utils::fmt_bytes;

/// Decode already base64-decoded header bytes.
///
/// # Returns
/// - `Ok(Decoded)` when every field decodes.
/// - `Err(HeaderFormatError)` on the first malformed or missing field.
pub fn decode_header_bytes(bits: &[u8], opts: &DecodeOptions) -> Result<Decoded, HeaderFormatError> {
    let raw_version = *bits
        .first()
        .ok_or(HeaderFormatError::Truncated { need: 1, have: 0 })?;
    let version = HeaderVersion::from_raw(raw_version)?;
    trace!("tracker header version byte {} selects {} layout", raw_version, version.as_str());

    let (fixed, tail) = unpack_fixed(version.layout(), bits)?;
    version.decode_tail(fixed, tail, opts)
}

/// Decode a base64 header token.
pub fn decode_header_token(token: &str, opts: &DecodeOptions) -> Result<Decoded, HeaderFormatError> {
    let bits = decode_token_bytes(token).map_err(|e| {
        debug!("tracker header token is not base64: {}", e);
        e
    })?;

    decode_header_bytes(&bits, opts).map_err(|e| {
        debug!("tracker header rejected: {} (bytes {})", e, fmt_bytes(&bits));
        e
    })
}
