//! headers/strategy.rs
//!
//! Per-version decoding of everything after the fixed prefix.
//!
//! Design notes:
//! - `HeaderVersion` is a closed set; each arm fills the same `Decoded` shape.
//! - v0/v1: rule indices only.
//! - v2: NUL-terminated region string, then rule indices.
//! - v3: region and address class from the flags byte, address block, then rule indices.

use crate::constants::REGION_GLOBAL;
use crate::headers::address::{parse_flags, read_address};
use crate::headers::fields::{LAYOUT_V0_V1, LAYOUT_V2, LAYOUT_V3, Field};
use crate::headers::types::{AddressValue, FixedFields, Flags, HeaderFormatError, HeaderVersion};
use crate::headers::varint::decode_rule_indices;
use crate::types::DecodeOptions;

/// Fully decoded header contents, before derived values are computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub version: HeaderVersion,
    pub fixed: FixedFields,
    pub region: String,
    pub address: AddressValue,
    pub sbrs: Option<u8>,
    pub flags: Option<Flags>,
    pub rule_indices: Vec<u64>,
}

impl HeaderVersion {
    /// Fixed-field layout of this version.
    pub const fn layout(self) -> &'static [Field] {
        match self {
            HeaderVersion::V0OrV1 => LAYOUT_V0_V1,
            HeaderVersion::V2 => LAYOUT_V2,
            HeaderVersion::V3 => LAYOUT_V3,
        }
    }

    /// Decode the bytes that follow the fixed prefix.
    pub fn decode_tail(
        self,
        fixed: FixedFields,
        tail: &[u8],
        opts: &DecodeOptions,
    ) -> Result<Decoded, HeaderFormatError> {
        match self {
            HeaderVersion::V0OrV1 => decode_v1_tail(fixed, tail, opts),
            HeaderVersion::V2 => decode_v2_tail(fixed, tail, opts),
            HeaderVersion::V3 => decode_v3_tail(fixed, tail, opts),
        }
    }
}

fn decode_v1_tail(fixed: FixedFields, tail: &[u8], opts: &DecodeOptions) -> Result<Decoded, HeaderFormatError> {
    // Old headers carry no region, address or reputation.
    Ok(Decoded {
        version: HeaderVersion::V0OrV1,
        fixed,
        region: REGION_GLOBAL.to_string(),
        address: AddressValue::None,
        sbrs: None,
        flags: None,
        rule_indices: decode_rule_indices(tail, opts.rule_stream)?,
    })
}

fn decode_v2_tail(fixed: FixedFields, tail: &[u8], opts: &DecodeOptions) -> Result<Decoded, HeaderFormatError> {
    let nul = tail
        .iter()
        .position(|&b| b == 0)
        .ok_or(HeaderFormatError::MissingRegionTerminator)?;
    let region = String::from_utf8_lossy(&tail[..nul]).into_owned();

    Ok(Decoded {
        version: HeaderVersion::V2,
        fixed,
        region,
        address: fixed.ip.map(AddressValue::Ipv4).unwrap_or_default(),
        sbrs: fixed.sbrs,
        flags: None,
        rule_indices: decode_rule_indices(&tail[nul + 1..], opts.rule_stream)?,
    })
}

fn decode_v3_tail(fixed: FixedFields, tail: &[u8], opts: &DecodeOptions) -> Result<Decoded, HeaderFormatError> {
    let raw_flags = fixed.flags.unwrap_or_default();
    let flags = parse_flags(raw_flags)?;
    let (address, rest) = read_address(flags.address_class, tail)?;

    Ok(Decoded {
        version: HeaderVersion::V3,
        fixed,
        region: flags.region().to_string(),
        address,
        sbrs: fixed.sbrs,
        flags: Some(flags),
        rule_indices: decode_rule_indices(rest, opts.rule_stream)?,
    })
}
