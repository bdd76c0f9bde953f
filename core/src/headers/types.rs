//! headers/types.rs
//! Wire-level types of the tracker header.
//!
//! Notes:
//! - Three layouts exist, selected by the first decoded byte.
//! - Multi-byte integers are little-endian; the raw IPv4 blob is network order.
//! - Everything here is plain data; decoding lives in the sibling modules.

use bitflags::bitflags;
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::{flags, version_ids, REGIONS, REGION_UNKNOWN};
use crate::utils::enum_name_or_hex;

/// Layout family selected by the version byte.
///
/// Versions 0 and 1 share one layout; every arm produces the same decoded shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HeaderVersion {
    V0OrV1,
    V2,
    V3,
}

impl HeaderVersion {
    /// Map a raw version byte onto its layout family.
    pub fn from_raw(raw: u8) -> Result<Self, HeaderFormatError> {
        match raw {
            version_ids::V0 | version_ids::V1 => Ok(HeaderVersion::V0OrV1),
            version_ids::V2 => Ok(HeaderVersion::V2),
            version_ids::V3 => Ok(HeaderVersion::V3),
            _ => Err(HeaderFormatError::UnknownVersion { raw }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeaderVersion::V0OrV1 => "v0/v1",
            HeaderVersion::V2 => "v2",
            HeaderVersion::V3 => "v3",
        }
    }
}

/// How much of the sender address a V3 header carries (flags bits 7-6).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum AddressClass {
    Ipv4      = 1,
    Ipv6Top64 = 2,
    Ipv6Full  = 3,
}

impl AddressClass {
    pub fn from_code(raw: u8) -> Result<Self, HeaderFormatError> {
        AddressClass::try_from_primitive(raw)
            .map_err(|_| HeaderFormatError::UnknownAddressClass { raw })
    }

    /// Number of address bits present: 32, 64 or 128.
    pub const fn bits(self) -> u8 {
        match self {
            AddressClass::Ipv4 => 32,
            AddressClass::Ipv6Top64 => 64,
            AddressClass::Ipv6Full => 128,
        }
    }
}

bitflags! {
    /// Single-bit markers of the V3 flags byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FlagBits: u8 {
        const OUTBOUND       = flags::OUTBOUND;
        const INTERNAL_RELAY = flags::INTERNAL_RELAY;
    }
}

/// Decoded V3 flags byte (`XXOIPP**`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags {
    pub address_class: AddressClass,
    pub is_outbound: bool,
    pub is_internal_relay: bool,
    /// Raw 2-bit region code.
    pub region_code: u8,
}

impl Flags {
    /// Region name of `region_code`, `"unknown"` for unmapped codes.
    pub fn region(&self) -> &'static str {
        region_name(self.region_code)
    }
}

pub fn region_name(code: u8) -> &'static str {
    REGIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(REGION_UNKNOWN)
}

/// Sender address as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressValue {
    #[default]
    None,
    /// Four raw bytes in network order.
    Ipv4([u8; 4]),
    /// Upper 64 bits of an IPv6 address; the lower 64 are zero.
    Ipv6Top64(u64),
    Ipv6Full128(u128),
}

/// Fixed-width prefix of a header. Fields absent from a layout stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedFields {
    pub version: u8,
    pub flags: Option<u8>,
    pub spam_score: u16,
    pub vof_score: u8,
    pub rules_ver: u32,
    pub ip: Option<[u8; 4]>,
    pub sbrs: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderFormatError {
    /// Token is not valid base64 after padding.
    #[error("invalid base64 token: {0}")]
    BadEncoding(#[from] base64::DecodeError),

    /// A fixed-field or variable-length integer read ran out of bytes.
    #[error("header truncated: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    #[error("unknown header version: {raw}")]
    UnknownVersion { raw: u8 },

    #[error("unknown address class: {}", enum_name_or_hex::<AddressClass>(*raw))]
    UnknownAddressClass { raw: u8 },

    /// A variable-length integer or running sum exceeds its target width.
    #[error("value exceeds {bits} bits")]
    Overflow { bits: u32 },

    #[error("region string is not NUL-terminated")]
    MissingRegionTerminator,
}
