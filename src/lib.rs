//! Extra Map - deterministic metadata for pipeline stages
//!
//! Provides a string-to-string mapping with value semantics and a canonical,
//! order-independent byte encoding, so that metadata attached to a unit of
//! work round-trips losslessly through a byte-oriented transport.

pub mod error;
pub mod extra;

pub use error::{ExtraError, Result};
pub use extra::Extra;
