//! Async traits for the LL layer.
//!
//! These traits are async versions of `TextReader` and `TextWriter`, for
//! hosts that expose their shared text surface through an async runtime.
//!
//! Enable the `async` feature to use these traits:
//!
//! ```toml
//! [dependencies]
//! textbus-ll-store = { version = "0.1", features = ["async"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{DeviceError, TextReader, TextWriter};

/// Async version of `TextReader`.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn AsyncTextReader>`.
#[async_trait]
pub trait AsyncTextReader: Send + Sync {
    /// Return the device's current full contents.
    async fn fetch_current_text_async(&mut self) -> Result<String, DeviceError>;
}

/// Async version of `TextWriter`.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn AsyncTextWriter>`.
#[async_trait]
pub trait AsyncTextWriter: Send + Sync {
    /// Commit a full replacement of the device's contents.
    async fn replace_text_async(&mut self, text: &str) -> Result<(), DeviceError>;

    /// Append to the device's contents without reading them first.
    async fn append_text_async(&mut self, text: &str) -> Result<(), DeviceError>;
}

/// Combined async fetch/replace/append.
pub trait AsyncTextDevice: AsyncTextReader + AsyncTextWriter {}
impl<T: AsyncTextReader + AsyncTextWriter> AsyncTextDevice for T {}

// Blanket implementations for references and boxes

#[async_trait]
impl<T: AsyncTextReader + ?Sized> AsyncTextReader for &mut T {
    async fn fetch_current_text_async(&mut self) -> Result<String, DeviceError> {
        (*self).fetch_current_text_async().await
    }
}

#[async_trait]
impl<T: AsyncTextWriter + ?Sized> AsyncTextWriter for &mut T {
    async fn replace_text_async(&mut self, text: &str) -> Result<(), DeviceError> {
        (*self).replace_text_async(text).await
    }

    async fn append_text_async(&mut self, text: &str) -> Result<(), DeviceError> {
        (*self).append_text_async(text).await
    }
}

#[async_trait]
impl<T: AsyncTextReader + ?Sized> AsyncTextReader for Box<T> {
    async fn fetch_current_text_async(&mut self) -> Result<String, DeviceError> {
        self.as_mut().fetch_current_text_async().await
    }
}

#[async_trait]
impl<T: AsyncTextWriter + ?Sized> AsyncTextWriter for Box<T> {
    async fn replace_text_async(&mut self, text: &str) -> Result<(), DeviceError> {
        self.as_mut().replace_text_async(text).await
    }

    async fn append_text_async(&mut self, text: &str) -> Result<(), DeviceError> {
        self.as_mut().append_text_async(text).await
    }
}

/// Adapter to share a sync device with async callers.
///
/// Clones share the same device behind a mutex, so each fetch or commit is
/// serialized. That does not make a fetch-modify-replace cycle atomic; callers
/// that race full rebuilds can still lose updates.
///
/// # Example
///
/// ```rust
/// use textbus_ll_store::{AsyncTextReader, AsyncTextWriter, InMemoryText, SyncToAsyncText};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut writer = SyncToAsyncText::new(InMemoryText::new());
/// let mut reader = writer.clone();
///
/// writer.append_text_async("Tq               I1\n").await.unwrap();
/// assert_eq!(reader.fetch_current_text_async().await.unwrap(), "Tq               I1\n");
/// # });
/// ```
pub struct SyncToAsyncText<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> SyncToAsyncText<T> {
    /// Create a new adapter wrapping a sync device.
    pub fn new(inner: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Get a reference to the inner device.
    pub fn inner(&self) -> &Mutex<T> {
        &self.inner
    }
}

impl<T> Clone for SyncToAsyncText<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[async_trait]
impl<T: TextReader + Send + 'static> AsyncTextReader for SyncToAsyncText<T> {
    async fn fetch_current_text_async(&mut self) -> Result<String, DeviceError> {
        let mut guard = self.inner.lock().map_err(|_| DeviceError::LockPoisoned)?;
        guard.fetch_current_text()
    }
}

#[async_trait]
impl<T: TextWriter + Send + 'static> AsyncTextWriter for SyncToAsyncText<T> {
    async fn replace_text_async(&mut self, text: &str) -> Result<(), DeviceError> {
        let mut guard = self.inner.lock().map_err(|_| DeviceError::LockPoisoned)?;
        guard.replace_text(text)
    }

    async fn append_text_async(&mut self, text: &str) -> Result<(), DeviceError> {
        let mut guard = self.inner.lock().map_err(|_| DeviceError::LockPoisoned)?;
        guard.append_text(text)
    }
}
