//! headers/varint.rs
//!
//! BER-style variable-length integers and the delta-coded rule-index stream.
//!
//! Design notes:
//! - Each byte carries 7 payload bits, most significant group first.
//! - A set high bit means "more bytes follow"; a clear high bit ends the integer.
//! - Accumulation is a bounded loop over the slice and rejects values wider
//!   than 64 bits.

use log::debug;

use crate::constants::ber::{BITS_PER_BYTE, CONTINUATION, PAYLOAD_MASK};
use crate::headers::types::HeaderFormatError;
use crate::types::RuleStreamPolicy;

/// Result of scanning a slice for BER integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BerScan {
    pub values: Vec<u64>,
    /// Bytes up to and including the terminal byte of the last finalized value.
    pub consumed: usize,
    /// Bytes of an unterminated integer left at the end of the slice.
    pub dangling: usize,
}

#[inline]
fn push_group(acc: u64, byte: u8) -> Result<u64, HeaderFormatError> {
    if acc > (u64::MAX >> BITS_PER_BYTE) {
        return Err(HeaderFormatError::Overflow { bits: u64::BITS });
    }
    Ok((acc << BITS_PER_BYTE) | u64::from(byte & PAYLOAD_MASK))
}

/// Scan up to `max_count` integers (all of them when `None`).
///
/// Never fails on a short slice; the caller decides what a dangling
/// group means.
pub fn scan_ber(bytes: &[u8], max_count: Option<usize>) -> Result<BerScan, HeaderFormatError> {
    let mut scan = BerScan::default();
    let mut acc = 0u64;
    let mut pos = 0usize;

    while pos < bytes.len() {
        if max_count.is_some_and(|n| scan.values.len() >= n) {
            break;
        }
        let byte = bytes[pos];
        acc = push_group(acc, byte)?;
        pos += 1;

        if byte & CONTINUATION == 0 {
            scan.values.push(acc);
            scan.consumed = pos;
            acc = 0;
        }
    }

    scan.dangling = pos - scan.consumed;
    Ok(scan)
}

/// Read BER integers from `bytes`.
///
/// Returns the decoded values and the number of bytes consumed.
/// With `max_count`, exactly that many integers must be present.
pub fn read_ber(bytes: &[u8], max_count: Option<usize>) -> Result<(Vec<u64>, usize), HeaderFormatError> {
    let scan = scan_ber(bytes, max_count)?;

    let short = max_count.is_some_and(|n| scan.values.len() < n);
    if scan.dangling > 0 || short {
        let have = scan.consumed + scan.dangling;
        return Err(HeaderFormatError::Truncated { need: have + 1, have });
    }

    Ok((scan.values, scan.consumed))
}

/// Read exactly `count` BER integers that each fit in 32 bits.
pub fn read_ber_u32(bytes: &[u8], count: usize) -> Result<(Vec<u32>, usize), HeaderFormatError> {
    let (values, consumed) = read_ber(bytes, Some(count))?;
    let chunks = values
        .into_iter()
        .map(|v| u32::try_from(v).map_err(|_| HeaderFormatError::Overflow { bits: u32::BITS }))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((chunks, consumed))
}

/// Decode the rule-index stream: running sums of BER-coded deltas.
///
/// Zero deltas are kept, so equal neighbouring ids are possible.
pub fn decode_rule_indices(bytes: &[u8], policy: RuleStreamPolicy) -> Result<Vec<u64>, HeaderFormatError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let scan = scan_ber(bytes, None)?;
    if scan.dangling > 0 {
        match policy {
            RuleStreamPolicy::Strict => {
                return Err(HeaderFormatError::Truncated {
                    need: bytes.len() + 1,
                    have: bytes.len(),
                });
            }
            RuleStreamPolicy::Lenient => {
                debug!(
                    "rule-index stream ends inside an integer; dropping {} trailing byte(s)",
                    scan.dangling
                );
            }
        }
    }

    let mut total = 0u64;
    scan.values
        .into_iter()
        .map(|delta| {
            total = total
                .checked_add(delta)
                .ok_or(HeaderFormatError::Overflow { bits: u64::BITS })?;
            Ok(total)
        })
        .collect()
}
