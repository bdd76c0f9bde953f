//! tracker.rs
//! Immutable facade over a decoded tracker header.
//!
//! Notes:
//! - Every derived value (scores, reputation, package version, address) is
//!   computed once in the constructor.
//! - Equality and hashing look at the raw token only.
//! - Rule indices are exposed as a read-only ordered sequence.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr};
use std::ops::Index;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    PACKAGES_VERSION_FORMAT, SBRS_OFFSET, SBRS_SCALE, SBRS_UNKNOWN, SPAM_SCORE_SCALE,
    VOF_SCORE_SCALE,
};
use crate::headers::decode::decode_header_token;
use crate::headers::strategy::Decoded;
use crate::headers::types::{AddressValue, Flags, HeaderFormatError, HeaderVersion};
use crate::net::ipv4_to_signed_int;
use crate::types::DecodeOptions;

/// A decoded tracker header.
#[derive(Debug, Clone)]
pub struct TrackerHeader {
    header: String,
    version: HeaderVersion,
    wire_version: u8,
    spam_score_raw: u16,
    vof_score_raw: u8,
    rules_ver: u32,
    region: String,
    address: AddressValue,
    sbrs_raw: Option<u8>,
    flags: Option<Flags>,
    rule_indices: Vec<u64>,

    spam_score: f64,
    vof_score: f64,
    sbrs: Option<f64>,
    packages_version: String,
    ip_addr: Option<IpAddr>,
}

fn scale_sbrs(raw: Option<u8>) -> Option<f64> {
    match raw {
        Some(r) if r != SBRS_UNKNOWN => Some(f64::from(r) / SBRS_SCALE - SBRS_OFFSET),
        _ => None,
    }
}

fn format_packages_version(secs: u32) -> String {
    DateTime::<Utc>::from_timestamp(i64::from(secs), 0)
        .map(|dt| dt.format(PACKAGES_VERSION_FORMAT).to_string())
        .unwrap_or_default()
}

impl TrackerHeader {
    /// Decode `token` with default options.
    pub fn decode(token: &str) -> Result<Self, HeaderFormatError> {
        Self::decode_with(token, &DecodeOptions::default())
    }

    pub fn decode_with(token: &str, opts: &DecodeOptions) -> Result<Self, HeaderFormatError> {
        let decoded = decode_header_token(token, opts)?;
        Ok(Self::from_decoded(token.to_owned(), decoded))
    }

    fn from_decoded(header: String, d: Decoded) -> Self {
        let fixed = d.fixed;
        Self {
            header,
            version: d.version,
            wire_version: fixed.version,
            spam_score_raw: fixed.spam_score,
            vof_score_raw: fixed.vof_score,
            rules_ver: fixed.rules_ver,
            region: d.region,
            address: d.address,
            sbrs_raw: d.sbrs,
            flags: d.flags,
            rule_indices: d.rule_indices,

            spam_score: f64::from(fixed.spam_score) / SPAM_SCORE_SCALE,
            vof_score: f64::from(fixed.vof_score) / VOF_SCORE_SCALE,
            sbrs: scale_sbrs(d.sbrs),
            packages_version: format_packages_version(fixed.rules_ver),
            ip_addr: d.address.to_ip_addr(),
        }
    }

    /// The raw base64 token.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Version byte as found on the wire (0, 1, 2 or 3).
    pub fn header_version(&self) -> u8 {
        self.wire_version
    }

    pub fn version(&self) -> HeaderVersion {
        self.version
    }

    pub fn spam_score_raw(&self) -> u16 {
        self.spam_score_raw
    }

    pub fn vof_score_raw(&self) -> u8 {
        self.vof_score_raw
    }

    /// `None` for v0/v1 headers, which carry no reputation byte.
    pub fn sbrs_raw(&self) -> Option<u8> {
        self.sbrs_raw
    }

    /// Spam score in `[0, 100]`.
    pub fn spam_score(&self) -> f64 {
        self.spam_score
    }

    /// VOF score in `[0, 5]`.
    pub fn vof_score(&self) -> f64 {
        self.vof_score
    }

    /// Sender reputation in `[-10.0, 15.4]`, `None` when unknown.
    pub fn sbrs(&self) -> Option<f64> {
        self.sbrs
    }

    /// Rule package timestamp (unix seconds).
    pub fn rules_ver(&self) -> u32 {
        self.rules_ver
    }

    /// Rule package timestamp as `YYYYmmdd_HHMMSS` (UTC).
    pub fn packages_version(&self) -> &str {
        &self.packages_version
    }

    pub fn packages_version_int(&self) -> u64 {
        u64::from(self.rules_ver)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Alias of [`region`](Self::region).
    pub fn profile(&self) -> &str {
        &self.region
    }

    pub fn address(&self) -> AddressValue {
        self.address
    }

    pub fn ip_addr(&self) -> Option<IpAddr> {
        self.ip_addr
    }

    /// Sender IPv4 address as a signed 32-bit integer.
    pub fn ip(&self) -> Option<i32> {
        match self.address {
            AddressValue::Ipv4(octets) => Some(ipv4_to_signed_int(octets)),
            _ => None,
        }
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.address {
            AddressValue::Ipv4(octets) => Some(Ipv4Addr::from(octets)),
            _ => None,
        }
    }

    /// Sender IPv6 address as a 128-bit integer. Top-64 headers have the lower half zeroed.
    pub fn ipv6(&self) -> Option<u128> {
        self.address.ipv6_u128()
    }

    /// v3 flags; `None` for older layouts.
    pub fn flags(&self) -> Option<&Flags> {
        self.flags.as_ref()
    }

    /// Address width carried by a v3 header: 32, 64 or 128.
    pub fn ip_version(&self) -> Option<u8> {
        self.flags.map(|f| f.address_class.bits())
    }

    pub fn is_outbound(&self) -> Option<bool> {
        self.flags.map(|f| f.is_outbound)
    }

    pub fn is_internal_relay(&self) -> Option<bool> {
        self.flags.map(|f| f.is_internal_relay)
    }

    pub fn rule_indices(&self) -> &[u64] {
        &self.rule_indices
    }

    pub fn len(&self) -> usize {
        self.rule_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_indices.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<u64> {
        self.rule_indices.get(i).copied()
    }

    pub fn contains(&self, rule: u64) -> bool {
        self.rule_indices.contains(&rule)
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u64>> {
        self.rule_indices.iter().copied()
    }

    pub fn summary(&self) -> HeaderSummary {
        HeaderSummary {
            header: self.header.clone(),
            header_version: self.wire_version,
            spam_score: self.spam_score,
            vof_score: self.vof_score,
            sbrs: self.sbrs,
            packages_version: self.packages_version.clone(),
            packages_version_int: self.packages_version_int(),
            profile: self.region.clone(),
            ip: self.ip_addr.map(|ip| ip.to_string()),
            ip_version: self.ip_version(),
            is_outbound: self.is_outbound(),
            is_internal_relay: self.is_internal_relay(),
            rule_indices: self.rule_indices.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.summary())
    }
}

impl FromStr for TrackerHeader {
    type Err = HeaderFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackerHeader::decode(s)
    }
}

impl PartialEq for TrackerHeader {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
    }
}

impl Eq for TrackerHeader {}

impl Hash for TrackerHeader {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.hash(state);
    }
}

impl Index<usize> for TrackerHeader {
    type Output = u64;

    fn index(&self, i: usize) -> &u64 {
        &self.rule_indices[i]
    }
}

impl<'a> IntoIterator for &'a TrackerHeader {
    type Item = u64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TrackerHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: (", self.packages_version)?;
        for (i, rule) in self.rule_indices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", rule)?;
        }
        f.write_str(")>")
    }
}

/// Flat, serializable view of a decoded header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderSummary {
    pub header: String,
    pub header_version: u8,
    pub spam_score: f64,
    pub vof_score: f64,
    pub sbrs: Option<f64>,
    pub packages_version: String,
    pub packages_version_int: u64,
    pub profile: String,
    pub ip: Option<String>,
    pub ip_version: Option<u8>,
    pub is_outbound: Option<bool>,
    pub is_internal_relay: Option<bool>,
    pub rule_indices: Vec<u64>,
}
