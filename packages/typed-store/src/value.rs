//! Rust types that can be stored in a record.

use textbus_core_store::{
    decode_float, decode_float64, decode_int, decode_int64, decode_string, encode_float,
    encode_float64, encode_int, encode_int64, encode_string, DataType, Error,
};

/// A value with a record data type and a payload codec.
///
/// Implemented for `i32`, `i64` (int records), `f32`, `f64` (float records)
/// and `String` (string records). Narrow and wide variants share a tag, so an
/// `i64` written under an id can be read back as `i32` when it fits.
pub trait BusValue: Sized {
    /// The data type tag records of this type carry.
    const DATA_TYPE: DataType;

    /// Encode as payload text.
    fn encode_payload(&self) -> String;

    /// Decode payload text.
    fn decode_payload(text: &str) -> Result<Self, Error>;
}

impl BusValue for i32 {
    const DATA_TYPE: DataType = DataType::Int;

    fn encode_payload(&self) -> String {
        encode_int(*self)
    }

    fn decode_payload(text: &str) -> Result<Self, Error> {
        decode_int(text)
    }
}

impl BusValue for i64 {
    const DATA_TYPE: DataType = DataType::Int;

    fn encode_payload(&self) -> String {
        encode_int64(*self)
    }

    fn decode_payload(text: &str) -> Result<Self, Error> {
        decode_int64(text)
    }
}

impl BusValue for f32 {
    const DATA_TYPE: DataType = DataType::Float;

    fn encode_payload(&self) -> String {
        encode_float(*self)
    }

    fn decode_payload(text: &str) -> Result<Self, Error> {
        decode_float(text)
    }
}

impl BusValue for f64 {
    const DATA_TYPE: DataType = DataType::Float;

    fn encode_payload(&self) -> String {
        encode_float64(*self)
    }

    fn decode_payload(text: &str) -> Result<Self, Error> {
        decode_float64(text)
    }
}

impl BusValue for String {
    const DATA_TYPE: DataType = DataType::String;

    fn encode_payload(&self) -> String {
        encode_string(self)
    }

    fn decode_payload(text: &str) -> Result<Self, Error> {
        Ok(decode_string(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_follow_type() {
        assert_eq!(<i32 as BusValue>::DATA_TYPE, DataType::Int);
        assert_eq!(<i64 as BusValue>::DATA_TYPE, DataType::Int);
        assert_eq!(<f32 as BusValue>::DATA_TYPE, DataType::Float);
        assert_eq!(<f64 as BusValue>::DATA_TYPE, DataType::Float);
        assert_eq!(<String as BusValue>::DATA_TYPE, DataType::String);
    }

    #[test]
    fn wide_values_narrow_when_they_fit() {
        let payload = 12_i64.encode_payload();
        assert_eq!(i32::decode_payload(&payload).unwrap(), 12);

        let payload = (i64::from(i32::MAX) + 1).encode_payload();
        assert!(i32::decode_payload(&payload).is_err());
    }

    #[test]
    fn strings_are_verbatim() {
        let value = " spaced out ".to_string();
        assert_eq!(value.encode_payload(), " spaced out ");
        assert_eq!(String::decode_payload(" x ").unwrap(), " x ");
    }
}
