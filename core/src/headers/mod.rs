//! headers/mod.rs
//! Decoding of the base64 tracker header carried in spam verdict emails.
//!
//! Notes:
//! - Three wire layouts, selected by the first decoded byte (0/1, 2, 3).
//! - Rule ids are delta-coded BER integers; v3 IPv6 chunks use the same coding.
//! - Decode only. There is no encoder.

pub mod types;
pub mod token;
pub mod varint;
pub mod fields;
pub mod address;
pub mod strategy;
pub mod decode;

pub use types::*;
pub use strategy::Decoded;
pub use decode::{decode_header_bytes, decode_header_token};
