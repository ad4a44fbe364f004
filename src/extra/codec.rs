//! Extra Codec Module
//!
//! Canonical byte encoding for the `Extra` mapping: records of `key=value`
//! joined by newlines, keys sorted so that equal mappings always encode to
//! identical bytes regardless of construction order.

use std::collections::HashMap;

use crate::error::{ExtraError, Result};
use crate::extra::{Extra, KEY_VALUE_DELIMITER, RECORD_SEPARATOR};

impl Extra {
    // == Serialize ==
    /// Encodes the mapping to its canonical byte form.
    ///
    /// Keys are emitted in ascending byte-wise order, one `key=value` record
    /// per key, joined by `\n` with no trailing separator. Sorting is what
    /// makes the output deterministic: the in-memory map has no iteration
    /// order, but two equal mappings must produce identical bytes.
    ///
    /// # Returns
    /// - `None` for an absent mapping
    /// - `Some` of zero-length bytes for a present, empty mapping
    /// - `Some` of the sorted records otherwise
    ///
    /// Keys or values containing `=` or `\n` make the encoding ambiguous
    /// and are not supported; decode is not guaranteed to reconstruct them.
    pub fn serialize(&self) -> Option<Vec<u8>> {
        let entries = self.entries()?;

        let mut keys: Vec<&String> = entries.keys().collect();
        keys.sort();

        let mut encoded = String::new();
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                encoded.push(RECORD_SEPARATOR);
            }
            encoded.push_str(key);
            encoded.push(KEY_VALUE_DELIMITER);
            encoded.push_str(&entries[*key]);
        }
        Some(encoded.into_bytes())
    }

    // == Deserialize ==
    /// Decodes a mapping from its canonical byte form.
    ///
    /// Absent input yields an absent mapping. Otherwise the input is split
    /// into records on newlines (a single trailing newline on the final
    /// record is tolerated) and each record is split on the *first* `=`;
    /// the value may itself contain further `=` characters. If keys collide,
    /// the later record wins.
    ///
    /// # Errors
    /// Returns [`ExtraError::MalformedRecord`] for any record without a `=`
    /// delimiter, or for a record that is not valid UTF-8. The error is
    /// authoritative: no partial mapping is returned.
    pub fn deserialize(bytes: Option<&[u8]>) -> Result<Extra> {
        let bytes = match bytes {
            Some(bytes) => bytes,
            None => return Ok(Extra::absent()),
        };
        if bytes.is_empty() {
            return Ok(Extra::new());
        }

        let mut entries = HashMap::new();
        for record in split_records(bytes) {
            let record = std::str::from_utf8(record)
                .map_err(|_| ExtraError::MalformedRecord(String::from_utf8_lossy(record).into_owned()))?;
            let (key, value) = record
                .split_once(KEY_VALUE_DELIMITER)
                .ok_or_else(|| ExtraError::MalformedRecord(record.to_string()))?;
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(Extra::from(entries))
    }
}

// == Record Splitting ==
/// Splits non-empty encoded bytes into records, tolerating one trailing
/// newline on the final record.
fn split_records(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = match bytes.split_last() {
        Some((&last, rest)) if last == RECORD_SEPARATOR as u8 => rest,
        _ => bytes,
    };
    body.split(|&b| b == RECORD_SEPARATOR as u8)
}
