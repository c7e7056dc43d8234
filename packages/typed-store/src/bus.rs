//! The typed accessor front end.

use textbus_core_store::{BusConfig, DataType, Error, Layout, RecordId};
use textbus_ll_store::TextDevice;

use crate::BusValue;

/// Result of a static float read.
///
/// A missing record and an undecodable payload both report `found: false`
/// with a NaN `value`, so callers that ignore the flag still hold an invalid
/// number rather than a plausible one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatReading {
    pub found: bool,
    pub value: f32,
}

impl FloatReading {
    /// A reading for a record that is absent or unreadable.
    pub fn missing() -> Self {
        FloatReading {
            found: false,
            value: f32::NAN,
        }
    }

    /// `Some(value)` when the record was found and decoded.
    pub fn into_option(self) -> Option<f32> {
        self.found.then_some(self.value)
    }

    /// The value when found, otherwise `default`.
    pub fn unwrap_or(self, default: f32) -> f32 {
        if self.found {
            self.value
        } else {
            default
        }
    }
}

impl From<Option<f32>> for FloatReading {
    fn from(value: Option<f32>) -> Self {
        match value {
            Some(value) => FloatReading { found: true, value },
            None => FloatReading::missing(),
        }
    }
}

impl From<FloatReading> for Option<f32> {
    fn from(reading: FloatReading) -> Self {
        reading.into_option()
    }
}

/// A record bus over one text device.
///
/// The bus holds no copy of the buffer between calls. Device errors are
/// returned as `Err`; a record that is missing or cannot be decoded is
/// reported as absent.
///
/// # Example
///
/// ```rust
/// use textbus_typed_store::{record_id, Bus, InMemoryText};
///
/// let mut bus = Bus::new(InMemoryText::new());
/// let x = record_id!("x");
///
/// bus.write_static_int(&x, 5).unwrap();
/// bus.write_static_float(&x, 1.0).unwrap();
///
/// assert_eq!(bus.read_static_int(&x).unwrap(), Some(5));
/// assert_eq!(bus.read_static_float(&x).unwrap().into_option(), Some(1.0));
/// ```
pub struct Bus<D> {
    device: D,
    layout: Layout,
}

impl<D: TextDevice> Bus<D> {
    /// Create a bus with the default layout.
    pub fn new(device: D) -> Self {
        Self::with_layout(device, Layout::default())
    }

    /// Create a bus with an explicit layout.
    pub fn with_layout(device: D, layout: Layout) -> Self {
        Bus { device, layout }
    }

    /// Create a bus from a configuration, validating it first.
    pub fn with_config(device: D, config: &BusConfig) -> Result<Self, Error> {
        Ok(Self::with_layout(device, config.layout()?))
    }

    /// The layout buffers are read and written with.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Get a reference to the device.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Get a mutable reference to the device.
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Give the device back.
    pub fn into_inner(self) -> D {
        self.device
    }

    /// Fetch the current buffer.
    pub fn snapshot(&mut self) -> Result<String, Error> {
        Ok(self.device.fetch_current_text()?)
    }

    // === Generic accessors ===

    /// Set the static record `(id, T::DATA_TYPE)`.
    pub fn write_static<T: BusValue>(&mut self, id: &RecordId, value: &T) -> Result<(), Error> {
        self.write_static_payload(id, T::DATA_TYPE, &value.encode_payload())
    }

    /// Read the static record `(id, T::DATA_TYPE)`.
    ///
    /// Returns `Ok(None)` when the record is missing or its payload does not
    /// decode as `T`.
    pub fn read_static<T: BusValue>(&mut self, id: &RecordId) -> Result<Option<T>, Error> {
        let Some(payload) = self.read_static_payload(id, T::DATA_TYPE)? else {
            return Ok(None);
        };

        match T::decode_payload(&payload) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::debug!("static record '{}' unreadable: {}", id, e);
                Ok(None)
            }
        }
    }

    /// Queue a temporary record at the tail of the buffer.
    ///
    /// This appends without reading the device.
    pub fn push_temporary<T: BusValue>(&mut self, id: &RecordId, value: &T) -> Result<(), Error> {
        let record = self
            .layout
            .append_temporary(id, T::DATA_TYPE, &value.encode_payload())?;
        self.device.append_text(&record)?;
        Ok(())
    }

    /// Remove and return the oldest temporary record `(id, T::DATA_TYPE)`.
    ///
    /// A record whose payload does not decode is still removed, and reported
    /// as `None`.
    pub fn take_temporary<T: BusValue>(&mut self, id: &RecordId) -> Result<Option<T>, Error> {
        let buffer = self.device.fetch_current_text()?;
        let Some((payload, rest)) = self.layout.take_temporary(&buffer, id, T::DATA_TYPE) else {
            return Ok(None);
        };

        let decoded = T::decode_payload(payload);
        self.device.replace_text(&rest)?;

        match decoded {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::debug!("temporary record '{}' discarded: {}", id, e);
                Ok(None)
            }
        }
    }

    // === Typed families ===

    /// Set the static int record `id`.
    pub fn write_static_int(&mut self, id: &RecordId, value: i32) -> Result<(), Error> {
        self.write_static(id, &value)
    }

    /// Read the static int record `id`.
    pub fn read_static_int(&mut self, id: &RecordId) -> Result<Option<i32>, Error> {
        self.read_static(id)
    }

    /// Set the static float record `id`.
    pub fn write_static_float(&mut self, id: &RecordId, value: f32) -> Result<(), Error> {
        self.write_static(id, &value)
    }

    /// Read the static float record `id`.
    ///
    /// Never fails for a missing or malformed record; see [`FloatReading`].
    pub fn read_static_float(&mut self, id: &RecordId) -> Result<FloatReading, Error> {
        Ok(self.read_static::<f32>(id)?.into())
    }

    /// Set the static string record `id`.
    ///
    /// Fails if `value` contains the terminator.
    pub fn write_static_string(&mut self, id: &RecordId, value: &str) -> Result<(), Error> {
        self.write_static_payload(id, DataType::String, value)
    }

    /// Read the static string record `id`.
    pub fn read_static_string(&mut self, id: &RecordId) -> Result<Option<String>, Error> {
        self.read_static(id)
    }

    // === Raw payloads ===

    fn write_static_payload(
        &mut self,
        id: &RecordId,
        data_type: DataType,
        payload: &str,
    ) -> Result<(), Error> {
        let buffer = self.device.fetch_current_text()?;
        let rebuilt = self.layout.write_static(&buffer, id, data_type, payload)?;
        self.device.replace_text(&rebuilt)?;
        Ok(())
    }

    fn read_static_payload(
        &mut self,
        id: &RecordId,
        data_type: DataType,
    ) -> Result<Option<String>, Error> {
        let buffer = self.device.fetch_current_text()?;
        Ok(self
            .layout
            .extract_static(&buffer, id, data_type)
            .map(str::to_string))
    }
}
