//! Wire constants for the tracker header.
//!
//! All tables here are compile-time data shared read-only by every decode.

/// Version bytes as they appear in the first decoded byte.
pub mod version_ids {
    pub const V0: u8 = 0;
    pub const V1: u8 = 1;
    pub const V2: u8 = 2;
    pub const V3: u8 = 3;
}

/// Fixed prefix lengths per layout (bytes, no padding between fields).
pub const FIXED_LEN_V0_V1: usize = 1 + 2 + 1 + 4;
pub const FIXED_LEN_V2: usize = FIXED_LEN_V0_V1 + 4 + 1;
pub const FIXED_LEN_V3: usize = 1 + 1 + 2 + 1 + 4 + 1;

/// Raw spam score divisor: `u16::MAX / 655.35 == 100.0`.
pub const SPAM_SCORE_SCALE: f64 = 655.35;
/// Raw VOF score divisor: `u8::MAX / 51.0 == 5.0`.
pub const VOF_SCORE_SCALE: f64 = 51.0;

/// Raw SBRS byte meaning "no reputation available".
pub const SBRS_UNKNOWN: u8 = 255;
pub const SBRS_SCALE: f64 = 10.0;
pub const SBRS_OFFSET: f64 = 10.0;

/// `strftime`-style layout of the package version string.
pub const PACKAGES_VERSION_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Region of headers that carry no region information.
pub const REGION_GLOBAL: &str = "global";
pub const REGION_UNKNOWN: &str = "unknown";

/// V3 region code → region name.
pub const REGIONS: &[(u8, &str)] = &[
    (0, REGION_GLOBAL),
    (2, "zh"),
];

/// V3 flags byte layout: `XXOIPP**`.
pub mod flags {
    pub const ADDRESS_CLASS_SHIFT: u8 = 6;
    pub const ADDRESS_CLASS_MASK: u8 = 0b11;
    pub const OUTBOUND: u8 = 0b0010_0000;
    pub const INTERNAL_RELAY: u8 = 0b0001_0000;
    pub const REGION_SHIFT: u8 = 2;
    pub const REGION_MASK: u8 = 0b11;
}

/// Variable-length integer encoding.
pub mod ber {
    pub const CONTINUATION: u8 = 0x80;
    pub const PAYLOAD_MASK: u8 = 0x7F;
    pub const BITS_PER_BYTE: u32 = 7;
}

/// Number of varint chunks following the 32-bit top chunk of an IPv6 address.
pub const IPV6_TOP64_CHUNKS: usize = 1;
pub const IPV6_FULL_CHUNKS: usize = 3;
