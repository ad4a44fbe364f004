//! Extra Module
//!
//! Provides the `Extra` metadata mapping with a canonical byte encoding.

mod codec;
mod map;


// Re-export public types
pub use map::Extra;

// == Public Constants ==
/// Delimiter between a key and its value within one record
pub const KEY_VALUE_DELIMITER: char = '=';

/// Separator between records in the encoded form
pub const RECORD_SEPARATOR: char = '\n';
