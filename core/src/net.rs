//! Address presentation for decoded headers.
//!
//! Conversion only; addresses are never validated or classified here.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::headers::types::AddressValue;

/// IPv4 octets (network order) as the legacy signed 32-bit integer form.
pub fn ipv4_to_signed_int(octets: [u8; 4]) -> i32 {
    i32::from_be_bytes(octets)
}

/// Inverse of [`ipv4_to_signed_int`].
pub fn signed_int_to_ipv4(value: i32) -> Ipv4Addr {
    Ipv4Addr::from(value.to_be_bytes())
}

impl AddressValue {
    /// Full 128-bit value of an IPv6 address; `None` for IPv4 or no address.
    pub fn ipv6_u128(&self) -> Option<u128> {
        match *self {
            AddressValue::Ipv6Top64(top) => Some(u128::from(top) << 64),
            AddressValue::Ipv6Full128(v) => Some(v),
            AddressValue::None | AddressValue::Ipv4(_) => None,
        }
    }

    pub fn to_ip_addr(&self) -> Option<IpAddr> {
        match *self {
            AddressValue::None => None,
            AddressValue::Ipv4(octets) => Some(IpAddr::V4(Ipv4Addr::from(octets))),
            AddressValue::Ipv6Top64(_) | AddressValue::Ipv6Full128(_) => {
                self.ipv6_u128().map(|v| IpAddr::V6(Ipv6Addr::from(v)))
            }
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, AddressValue::None)
    }
}
