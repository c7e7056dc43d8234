//! Core TextBus: Record Codec Layer
//!
//! This layer gives meaning to the flat text of a TextBus device:
//! - `RecordId`: a validated identifier padded to the fixed id width
//! - `RecordKind` / `DataType`: the one-character tags of the wire grammar
//! - `Layout`: the terminator in use, and every codec, locator and mutator
//!   operation that depends on it
//! - `Records`: an iterator that parses a whole buffer for inspection
//!
//! Every operation is a pure function of a buffer snapshot. Writes return a
//! rebuilt buffer; committing it to a device is the caller's job.
//!
//! # Wire format
//!
//! ```text
//! Record       ::= RecordBody Terminator
//! RecordBody   ::= Kind Id(16) DataTypeTag Payload
//! Kind         ::= 'S' (static) | 'T' (temporary)
//! DataTypeTag  ::= 'I' | 'F' | 'S'
//! ```
//!
//! All static records sit in an unbroken prefix of the buffer, ahead of any
//! temporary records.
//!
//! # Example
//!
//! ```rust
//! use textbus_core_store::{record_id, DataType, Layout};
//!
//! let layout = Layout::default();
//! let id = record_id!("Altitude");
//!
//! let buffer = layout.write_static("", &id, DataType::Float, "100").unwrap();
//! assert_eq!(buffer, "SAltitude        F100\n");
//! assert_eq!(layout.extract_static(&buffer, &id, DataType::Float), Some("100"));
//! ```

mod codec;
mod config;
mod error;
mod format;
mod id;
mod locator;
mod mutator;
mod record;
mod temporary;

pub use codec::{
    decode_float, decode_float64, decode_int, decode_int64, decode_string, encode_float,
    encode_float64, encode_int, encode_int64, encode_string,
};
pub use config::BusConfig;
pub use error::Error;
pub use format::{DataType, Layout, RecordKind, DEFAULT_TERMINATOR, ID_WIDTH, RECORD_SEPARATOR};
pub use id::RecordId;
pub use record::{RecordSpan, RecordView, Records};

// Re-export LL types for convenience
pub use textbus_ll_store::{DeviceError, InMemoryText, TextDevice, TextReader, TextWriter};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn data_type() -> impl Strategy<Value = DataType> {
        prop_oneof![
            Just(DataType::Int),
            Just(DataType::Float),
            Just(DataType::String)
        ]
    }

    fn id() -> impl Strategy<Value = RecordId> {
        "[a-zA-Z0-9._]{0,16}".prop_map(|s| RecordId::new(&s).unwrap())
    }

    /// Payloads never contain the default terminator.
    fn payload() -> impl Strategy<Value = String> {
        "[^\n]{0,24}"
    }

    fn writes() -> impl Strategy<Value = Vec<(RecordId, DataType, String)>> {
        prop::collection::vec((id(), data_type(), payload()), 0..12)
    }

    proptest! {
        /// Roundtrip: the payload written is the payload extracted.
        #[test]
        fn prop_write_then_extract(
            seed in writes(),
            target in id(),
            dt in data_type(),
            value in payload(),
        ) {
            let layout = Layout::default();
            let mut buffer = String::new();
            for (id, dt, payload) in &seed {
                buffer = layout.write_static(&buffer, id, *dt, payload).unwrap();
            }

            buffer = layout.write_static(&buffer, &target, dt, &value).unwrap();
            prop_assert_eq!(layout.extract_static(&buffer, &target, dt), Some(value.as_str()));
        }

        /// Idempotence: rewriting the same value changes nothing.
        #[test]
        fn prop_rewrite_is_idempotent(seed in writes(), target in id(), dt in data_type(), value in payload()) {
            let layout = Layout::default();
            let mut buffer = String::new();
            for (id, dt, payload) in &seed {
                buffer = layout.write_static(&buffer, id, *dt, payload).unwrap();
            }

            let once = layout.write_static(&buffer, &target, dt, &value).unwrap();
            let twice = layout.write_static(&once, &target, dt, &value).unwrap();
            prop_assert_eq!(once.len(), twice.len());
            prop_assert_eq!(once, twice);
        }

        /// Independence: writing B leaves A's value unchanged.
        #[test]
        fn prop_untouched_records_keep_values(
            a in id(),
            a_value in payload(),
            b in id(),
            b_value in payload(),
            dt in data_type(),
        ) {
            prop_assume!(a != b);
            let layout = Layout::default();

            let buffer = layout.write_static("", &a, dt, &a_value).unwrap();
            let buffer = layout.write_static(&buffer, &b, dt, &b_value).unwrap();
            let buffer = layout.write_static(&buffer, &b, dt, "changed").unwrap();

            prop_assert_eq!(layout.extract_static(&buffer, &a, dt), Some(a_value.as_str()));
        }

        /// Prefix invariant: statics stay ahead of queued temporaries, and each
        /// (id, type) pair appears once.
        #[test]
        fn prop_statics_form_a_prefix(seed in writes(), queued in writes()) {
            let layout = Layout::default();
            let mut buffer = String::new();
            for (id, dt, payload) in &queued {
                buffer.push_str(&layout.append_temporary(id, *dt, payload).unwrap());
            }
            for (id, dt, payload) in &seed {
                buffer = layout.write_static(&buffer, id, *dt, payload).unwrap();
            }

            let records: Vec<RecordView<'_>> =
                layout.records(&buffer).collect::<Result<_, _>>().unwrap();
            let statics = records
                .iter()
                .take_while(|r| r.kind == RecordKind::Static)
                .count();
            prop_assert!(records[statics..].iter().all(|r| r.kind == RecordKind::Temporary));
            prop_assert_eq!(records.len() - statics, queued.len());

            let mut seen = std::collections::HashSet::new();
            for record in &records[..statics] {
                prop_assert!(seen.insert((record.id, record.data_type)));
            }
        }
    }
}
