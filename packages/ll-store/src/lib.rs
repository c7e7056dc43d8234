//! TextBus LL: Low-Level Text Device Traits
//!
//! This is the narrow waist of the TextBus stack. A device is a single shared
//! text blob that can be fetched whole, replaced whole, or appended to. Nothing
//! at this level knows about records, identifiers, or terminators.
//!
//! Use this layer for:
//! - Adapting a host's shared text surface (a panel, a file, a pipe) to the bus
//! - Test doubles that record how the blob was written
//! - Moving snapshots between hosts without inspecting them
//!
//! # Example
//!
//! ```rust
//! use textbus_ll_store::{DeviceError, TextReader, TextWriter};
//!
//! struct Panel {
//!     text: String,
//! }
//!
//! impl TextReader for Panel {
//!     fn fetch_current_text(&mut self) -> Result<String, DeviceError> {
//!         Ok(self.text.clone())
//!     }
//! }
//!
//! impl TextWriter for Panel {
//!     fn replace_text(&mut self, text: &str) -> Result<(), DeviceError> {
//!         self.text = text.to_string();
//!         Ok(())
//!     }
//!
//!     fn append_text(&mut self, text: &str) -> Result<(), DeviceError> {
//!         self.text.push_str(text);
//!         Ok(())
//!     }
//! }
//! ```
//!
//! # Async Support
//!
//! Enable the `async` feature for async trait variants:
//!
//! ```toml
//! [dependencies]
//! textbus-ll-store = { version = "0.1", features = ["async"] }
//! ```
//!
//! Then use `AsyncTextReader`, `AsyncTextWriter`, and `AsyncTextDevice`.

mod error;
mod memory;
mod traits;

pub use error::DeviceError;
pub use memory::InMemoryText;
pub use traits::{TextDevice, TextReader, TextWriter};

#[cfg(feature = "async")]
mod async_traits;

#[cfg(feature = "async")]
pub use async_traits::{AsyncTextDevice, AsyncTextReader, AsyncTextWriter, SyncToAsyncText};
