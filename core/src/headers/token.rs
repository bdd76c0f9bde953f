//! headers/token.rs
//!
//! Base64 normalization of the raw header value.
//!
//! Design notes:
//! - Tokens arrive with missing or partial padding; pad to a multiple of 4 first.
//! - Captured tokens carry non-zero bits after the last full byte, so the
//!   engine accepts trailing bits instead of rejecting them.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::headers::types::HeaderFormatError;

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Pad `token` with `=` up to the next multiple of 4 characters.
pub fn pad_token(token: &str) -> Cow<'_, str> {
    match token.len() % 4 {
        0 => Cow::Borrowed(token),
        rem => {
            let mut padded = String::with_capacity(token.len() + 4 - rem);
            padded.push_str(token);
            padded.extend(std::iter::repeat('=').take(4 - rem));
            Cow::Owned(padded)
        }
    }
}

/// Pad and base64-decode a header token.
pub fn decode_token_bytes(token: &str) -> Result<Vec<u8>, HeaderFormatError> {
    let padded = pad_token(token);
    Ok(TOKEN_ENGINE.decode(padded.as_bytes())?)
}
