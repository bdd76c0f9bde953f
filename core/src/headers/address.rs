//! headers/address.rs
//!
//! V3 flags byte and sender address block.
//!
//! Flags layout, MSB first: `XXOIPP**`
//! - `XX` address class code (1 → 32, 2 → 64, 3 → 128 bits)
//! - `O`  outbound
//! - `I`  internal relay
//! - `PP` region code
//! - `**` reserved

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::flags::{ADDRESS_CLASS_MASK, ADDRESS_CLASS_SHIFT, REGION_MASK, REGION_SHIFT};
use crate::constants::{IPV6_FULL_CHUNKS, IPV6_TOP64_CHUNKS};
use crate::headers::types::{AddressClass, AddressValue, FlagBits, Flags, HeaderFormatError};
use crate::headers::varint::read_ber_u32;

pub fn parse_flags(raw: u8) -> Result<Flags, HeaderFormatError> {
    let address_class = AddressClass::from_code((raw >> ADDRESS_CLASS_SHIFT) & ADDRESS_CLASS_MASK)?;
    let bits = FlagBits::from_bits_retain(raw);

    Ok(Flags {
        address_class,
        is_outbound: bits.contains(FlagBits::OUTBOUND),
        is_internal_relay: bits.contains(FlagBits::INTERNAL_RELAY),
        region_code: (raw >> REGION_SHIFT) & REGION_MASK,
    })
}

fn take4(bytes: &[u8]) -> Result<(&[u8], &[u8]), HeaderFormatError> {
    if bytes.len() < 4 {
        return Err(HeaderFormatError::Truncated { need: 4, have: bytes.len() });
    }
    Ok(bytes.split_at(4))
}

/// Read the address block for `class`.
///
/// Returns the address and the bytes left for the rule-index stream.
pub fn read_address(class: AddressClass, bytes: &[u8]) -> Result<(AddressValue, &[u8]), HeaderFormatError> {
    let (head, rest) = take4(bytes)?;

    match class {
        AddressClass::Ipv4 => {
            let octets = [head[0], head[1], head[2], head[3]];
            Ok((AddressValue::Ipv4(octets), rest))
        }
        AddressClass::Ipv6Top64 => {
            let top = LittleEndian::read_u32(head);
            let (chunks, used) = read_ber_u32(rest, IPV6_TOP64_CHUNKS)?;
            let value = (u64::from(top) << 32) | u64::from(chunks[0]);
            Ok((AddressValue::Ipv6Top64(value), &rest[used..]))
        }
        AddressClass::Ipv6Full => {
            let top = LittleEndian::read_u32(head);
            let (chunks, used) = read_ber_u32(rest, IPV6_FULL_CHUNKS)?;
            let value = (u128::from(top) << 96)
                | (u128::from(chunks[0]) << 64)
                | (u128::from(chunks[1]) << 32)
                | u128::from(chunks[2]);
            Ok((AddressValue::Ipv6Full128(value), &rest[used..]))
        }
    }
}
