//! Async typed accessors.
//!
//! `AsyncBus` is the `Bus` front end for devices that live behind an async
//! runtime. Record handling is the same `Layout` code the sync bus uses; only
//! the device calls are awaited.
//!
//! Enable the `async` feature to use it:
//!
//! ```toml
//! [dependencies]
//! textbus-typed-store = { version = "0.1", features = ["async"] }
//! ```

use textbus_core_store::{BusConfig, DataType, Error, Layout, RecordId};
use textbus_ll_store::AsyncTextDevice;

use crate::{BusValue, FloatReading};

/// A record bus over one async text device.
///
/// # Example
///
/// ```rust
/// use textbus_typed_store::{record_id, AsyncBus, InMemoryText, SyncToAsyncText};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut bus = AsyncBus::new(SyncToAsyncText::new(InMemoryText::new()));
/// let a = record_id!("a");
///
/// bus.write_static_float(&a, 0.25).await.unwrap();
/// assert_eq!(bus.read_static_float(&a).await.unwrap().into_option(), Some(0.25));
/// # });
/// ```
pub struct AsyncBus<D> {
    device: D,
    layout: Layout,
}

impl<D: AsyncTextDevice> AsyncBus<D> {
    /// Create a bus with the default layout.
    pub fn new(device: D) -> Self {
        Self::with_layout(device, Layout::default())
    }

    /// Create a bus with an explicit layout.
    pub fn with_layout(device: D, layout: Layout) -> Self {
        AsyncBus { device, layout }
    }

    /// Create a bus from a configuration, validating it first.
    pub fn with_config(device: D, config: &BusConfig) -> Result<Self, Error> {
        Ok(Self::with_layout(device, config.layout()?))
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn into_inner(self) -> D {
        self.device
    }

    /// Fetch the current buffer.
    pub async fn snapshot(&mut self) -> Result<String, Error> {
        Ok(self.device.fetch_current_text_async().await?)
    }

    /// Set the static record `(id, T::DATA_TYPE)`.
    pub async fn write_static<T: BusValue>(
        &mut self,
        id: &RecordId,
        value: &T,
    ) -> Result<(), Error> {
        self.write_static_payload(id, T::DATA_TYPE, &value.encode_payload())
            .await
    }

    /// Read the static record `(id, T::DATA_TYPE)`.
    ///
    /// Missing and undecodable records both read as `Ok(None)`.
    pub async fn read_static<T: BusValue>(&mut self, id: &RecordId) -> Result<Option<T>, Error> {
        let buffer = self.device.fetch_current_text_async().await?;
        let Some(payload) = self.layout.extract_static(&buffer, id, T::DATA_TYPE) else {
            return Ok(None);
        };

        match T::decode_payload(payload) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::debug!("static record '{}' unreadable: {}", id, e);
                Ok(None)
            }
        }
    }

    /// Queue a temporary record at the tail of the buffer.
    pub async fn push_temporary<T: BusValue>(
        &mut self,
        id: &RecordId,
        value: &T,
    ) -> Result<(), Error> {
        let record = self
            .layout
            .append_temporary(id, T::DATA_TYPE, &value.encode_payload())?;
        self.device.append_text_async(&record).await?;
        Ok(())
    }

    /// Remove and return the oldest temporary record `(id, T::DATA_TYPE)`.
    pub async fn take_temporary<T: BusValue>(
        &mut self,
        id: &RecordId,
    ) -> Result<Option<T>, Error> {
        let buffer = self.device.fetch_current_text_async().await?;
        let Some((payload, rest)) = self.layout.take_temporary(&buffer, id, T::DATA_TYPE) else {
            return Ok(None);
        };

        let decoded = T::decode_payload(payload);
        self.device.replace_text_async(&rest).await?;

        match decoded {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::debug!("temporary record '{}' discarded: {}", id, e);
                Ok(None)
            }
        }
    }

    pub async fn write_static_int(&mut self, id: &RecordId, value: i32) -> Result<(), Error> {
        self.write_static(id, &value).await
    }

    pub async fn read_static_int(&mut self, id: &RecordId) -> Result<Option<i32>, Error> {
        self.read_static(id).await
    }

    pub async fn write_static_float(&mut self, id: &RecordId, value: f32) -> Result<(), Error> {
        self.write_static(id, &value).await
    }

    /// Read the static float record `id`; see [`FloatReading`].
    pub async fn read_static_float(&mut self, id: &RecordId) -> Result<FloatReading, Error> {
        Ok(self.read_static::<f32>(id).await?.into())
    }

    /// Set the static string record `id`.
    ///
    /// Fails if `value` contains the terminator.
    pub async fn write_static_string(&mut self, id: &RecordId, value: &str) -> Result<(), Error> {
        self.write_static_payload(id, DataType::String, value).await
    }

    pub async fn read_static_string(&mut self, id: &RecordId) -> Result<Option<String>, Error> {
        self.read_static(id).await
    }

    async fn write_static_payload(
        &mut self,
        id: &RecordId,
        data_type: DataType,
        payload: &str,
    ) -> Result<(), Error> {
        let buffer = self.device.fetch_current_text_async().await?;
        let rebuilt = self.layout.write_static(&buffer, id, data_type, payload)?;
        self.device.replace_text_async(&rebuilt).await?;
        Ok(())
    }
}
