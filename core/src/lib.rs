//! tracker-core
//!
//! Pure Rust decoder for the base64 anti-spam tracker header.
//! Decode only; no I/O, no shared mutable state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod headers;
pub mod net;
pub mod tracker;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::headers::{AddressClass, AddressValue, Flags, HeaderFormatError, HeaderVersion};
    pub use crate::tracker::{HeaderSummary, TrackerHeader};
    pub use crate::types::{DecodeOptions, RuleStreamPolicy};
}
