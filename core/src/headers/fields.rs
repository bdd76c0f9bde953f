//! headers/fields.rs
//!
//! Fixed-width field unpacking.
//!
//! Design notes:
//! - Each layout is an ordered list of fields with no padding in between.
//! - Multi-byte integers are little-endian, the byte order captured headers use.

use byteorder::{ByteOrder, LittleEndian};

use crate::headers::types::{FixedFields, HeaderFormatError};

/// Wire width of a fixed field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    /// Four opaque bytes (raw IPv4 address).
    Blob4,
}

impl FieldKind {
    pub const fn width(self) -> usize {
        match self {
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::U32 | FieldKind::Blob4 => 4,
        }
    }
}

/// Named fixed fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Version,
    Flags,
    SpamScore,
    VofScore,
    RulesVer,
    Ip,
    Sbrs,
}

impl Field {
    pub const fn kind(self) -> FieldKind {
        match self {
            Field::Version | Field::Flags | Field::VofScore | Field::Sbrs => FieldKind::U8,
            Field::SpamScore => FieldKind::U16,
            Field::RulesVer => FieldKind::U32,
            Field::Ip => FieldKind::Blob4,
        }
    }
}

pub const LAYOUT_V0_V1: &[Field] = &[
    Field::Version,
    Field::SpamScore,
    Field::VofScore,
    Field::RulesVer,
];

pub const LAYOUT_V2: &[Field] = &[
    Field::Version,
    Field::SpamScore,
    Field::VofScore,
    Field::RulesVer,
    Field::Ip,
    Field::Sbrs,
];

pub const LAYOUT_V3: &[Field] = &[
    Field::Version,
    Field::Flags,
    Field::SpamScore,
    Field::VofScore,
    Field::RulesVer,
    Field::Sbrs,
];

/// Total byte length of a layout.
pub const fn layout_len(layout: &[Field]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while i < layout.len() {
        len += layout[i].kind().width();
        i += 1;
    }
    len
}

/// Unpack the fixed prefix described by `layout`.
///
/// Returns the fields and the bytes that follow the prefix.
pub fn unpack_fixed<'a>(layout: &[Field], buf: &'a [u8]) -> Result<(FixedFields, &'a [u8]), HeaderFormatError> {
    let need = layout_len(layout);
    if buf.len() < need {
        return Err(HeaderFormatError::Truncated { need, have: buf.len() });
    }

    let mut out = FixedFields::default();
    let mut off = 0usize;

    for field in layout {
        let width = field.kind().width();
        let raw = &buf[off..off + width];
        match field {
            Field::Version   => out.version = raw[0],
            Field::Flags     => out.flags = Some(raw[0]),
            Field::SpamScore => out.spam_score = LittleEndian::read_u16(raw),
            Field::VofScore  => out.vof_score = raw[0],
            Field::RulesVer  => out.rules_ver = LittleEndian::read_u32(raw),
            Field::Ip        => out.ip = Some([raw[0], raw[1], raw[2], raw[3]]),
            Field::Sbrs      => out.sbrs = Some(raw[0]),
        }
        off += width;
    }

    debug_assert_eq!(off, need, "unpacked length differs from layout length");

    Ok((out, &buf[need..]))
}
