//! Typed Access for TextBus
//!
//! This layer puts typed values on top of the record codec. It adds:
//! - `Bus`: a device plus a layout, with the static int/float/string accessors
//! - `BusValue`: the trait tying a Rust type to a data type tag and payload codec
//! - `FloatReading`: the found flag and NaN sentinel returned by float reads
//!
//! Every call fetches a fresh snapshot from the device. Writes commit a fully
//! rebuilt buffer; only temporary pushes use the device's append mode.
//!
//! # Example
//!
//! ```rust
//! use textbus_typed_store::{record_id, Bus, InMemoryText};
//!
//! let mut bus = Bus::new(InMemoryText::new());
//! let a = record_id!("a");
//!
//! bus.write_static_float(&a, 0.25).unwrap();
//! assert_eq!(bus.read_static_float(&a).unwrap().into_option(), Some(0.25));
//! ```
//!
//! # Async Support
//!
//! Enable the `async` feature for `AsyncBus`, the same accessors over an
//! `AsyncTextDevice`.
//!
//! # Concurrency
//!
//! A read-modify-write cycle is not atomic. Two writers sharing one device
//! must serialize whole `Bus` calls themselves, or the last commit wins.

mod bus;
mod value;

pub use bus::{Bus, FloatReading};
pub use value::BusValue;

#[cfg(feature = "async")]
mod async_bus;

#[cfg(feature = "async")]
pub use async_bus::AsyncBus;

// Re-export core types for convenience
pub use textbus_core_store::{
    record_id, BusConfig, DataType, Error, Layout, RecordId, RecordKind, RecordView,
};
pub use textbus_ll_store::{DeviceError, InMemoryText, TextDevice, TextReader, TextWriter};

// Re-export async device types when async feature is enabled
#[cfg(feature = "async")]
pub use textbus_ll_store::{AsyncTextDevice, AsyncTextReader, AsyncTextWriter, SyncToAsyncText};
