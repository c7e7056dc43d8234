//! Record and payload encoding.

use std::fmt::Display;
use std::str::FromStr;

use crate::format::{DataType, Layout, RecordKind};
use crate::{Error, RecordId};

/// Canonical base-10 text of an integer.
pub fn encode_int(value: i32) -> String {
    value.to_string()
}

/// Parse an integer payload.
///
/// Surrounding whitespace and a leading `+` are accepted.
pub fn decode_int(text: &str) -> Result<i32, Error> {
    parse_number(DataType::Int, text)
}

/// 64-bit variant of [`encode_int`].
pub fn encode_int64(value: i64) -> String {
    value.to_string()
}

/// 64-bit variant of [`decode_int`].
pub fn decode_int64(text: &str) -> Result<i64, Error> {
    parse_number(DataType::Int, text)
}

/// Shortest decimal text that parses back to exactly `value`.
///
/// ```rust
/// use textbus_core_store::{decode_float, encode_float};
///
/// let third = 1.0f32 / 3.0;
/// assert_eq!(decode_float(&encode_float(third)).unwrap().to_bits(), third.to_bits());
/// ```
pub fn encode_float(value: f32) -> String {
    value.to_string()
}

/// Parse a float payload.
///
/// Accepts exponent forms (`1E+20`) and the `NaN` / `inf` / `Infinity`
/// spellings in any case.
pub fn decode_float(text: &str) -> Result<f32, Error> {
    parse_number(DataType::Float, text)
}

/// 64-bit variant of [`encode_float`].
pub fn encode_float64(value: f64) -> String {
    value.to_string()
}

/// 64-bit variant of [`decode_float`].
pub fn decode_float64(text: &str) -> Result<f64, Error> {
    parse_number(DataType::Float, text)
}

/// String payloads are stored verbatim.
pub fn encode_string(value: &str) -> String {
    value.to_string()
}

/// String payloads are stored verbatim.
pub fn decode_string(text: &str) -> String {
    text.to_string()
}

fn parse_number<T>(data_type: DataType, text: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: Display,
{
    text.trim().parse::<T>().map_err(|e| Error::Parse {
        data_type,
        payload: text.to_string(),
        message: e.to_string(),
    })
}

impl Layout {
    /// Encode one complete record, terminator included.
    ///
    /// Fails instead of producing a record that would corrupt the buffer when
    /// the identifier or payload contains the terminator.
    pub fn encode_record(
        &self,
        kind: RecordKind,
        id: &RecordId,
        data_type: DataType,
        payload: &str,
    ) -> Result<String, Error> {
        if id.contains(self.terminator()) {
            return Err(Error::IdentifierContainsTerminator {
                id: id.trimmed().to_string(),
            });
        }
        if payload.contains(self.terminator()) {
            return Err(Error::PayloadContainsTerminator { data_type });
        }

        let mut record = String::with_capacity(id.as_str().len() + payload.len() + 3);
        record.push(kind.tag());
        record.push_str(id.as_str());
        record.push(data_type.tag());
        record.push_str(payload);
        record.push(self.terminator());
        Ok(record)
    }
}
