//! Core traits for the LL layer.

use crate::DeviceError;

/// Fetch the whole shared text blob.
///
/// This is the lowest-level read interface. The returned snapshot is owned by
/// the caller; later writes to the device do not affect it.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn TextReader>`.
pub trait TextReader: Send + Sync {
    /// Return the device's current full contents.
    ///
    /// An empty device returns an empty string, never an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use textbus_ll_store::{DeviceError, TextReader};
    ///
    /// fn line_count(device: &mut dyn TextReader) -> Result<usize, DeviceError> {
    ///     Ok(device.fetch_current_text()?.lines().count())
    /// }
    /// ```
    fn fetch_current_text(&mut self) -> Result<String, DeviceError>;
}

/// Write to the shared text blob.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn TextWriter>`.
pub trait TextWriter: Send + Sync {
    /// Commit a full replacement of the device's contents.
    fn replace_text(&mut self, text: &str) -> Result<(), DeviceError>;

    /// Append to the device's contents without reading them first.
    fn append_text(&mut self, text: &str) -> Result<(), DeviceError>;
}

/// Combined fetch/replace/append.
///
/// This is automatically implemented for any type that implements both
/// `TextReader` and `TextWriter`.
pub trait TextDevice: TextReader + TextWriter {}
impl<T: TextReader + TextWriter> TextDevice for T {}

// Blanket implementations for references and boxes

impl<T: TextReader + ?Sized> TextReader for &mut T {
    fn fetch_current_text(&mut self) -> Result<String, DeviceError> {
        (*self).fetch_current_text()
    }
}

impl<T: TextWriter + ?Sized> TextWriter for &mut T {
    fn replace_text(&mut self, text: &str) -> Result<(), DeviceError> {
        (*self).replace_text(text)
    }

    fn append_text(&mut self, text: &str) -> Result<(), DeviceError> {
        (*self).append_text(text)
    }
}

impl<T: TextReader + ?Sized> TextReader for Box<T> {
    fn fetch_current_text(&mut self) -> Result<String, DeviceError> {
        self.as_mut().fetch_current_text()
    }
}

impl<T: TextWriter + ?Sized> TextWriter for Box<T> {
    fn replace_text(&mut self, text: &str) -> Result<(), DeviceError> {
        self.as_mut().replace_text(text)
    }

    fn append_text(&mut self, text: &str) -> Result<(), DeviceError> {
        self.as_mut().append_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A device that only keeps the text.
    struct TestDevice {
        text: String,
    }

    impl TestDevice {
        fn new() -> Self {
            Self {
                text: String::new(),
            }
        }
    }

    impl TextReader for TestDevice {
        fn fetch_current_text(&mut self) -> Result<String, DeviceError> {
            Ok(self.text.clone())
        }
    }

    impl TextWriter for TestDevice {
        fn replace_text(&mut self, text: &str) -> Result<(), DeviceError> {
            self.text = text.to_string();
            Ok(())
        }

        fn append_text(&mut self, text: &str) -> Result<(), DeviceError> {
            self.text.push_str(text);
            Ok(())
        }
    }

    #[test]
    fn replace_then_append_works() {
        let mut device = TestDevice::new();

        device.replace_text("hello").unwrap();
        device.append_text(" world").unwrap();
        assert_eq!(device.fetch_current_text().unwrap(), "hello world");

        device.replace_text("reset").unwrap();
        assert_eq!(device.fetch_current_text().unwrap(), "reset");
    }

    #[test]
    fn object_safety_works() {
        let mut device = TestDevice::new();
        let dynamic: &mut dyn TextDevice = &mut device;

        dynamic.replace_text("data").unwrap();
        assert_eq!(dynamic.fetch_current_text().unwrap(), "data");
    }

    fn write_through<W: TextWriter>(mut writer: W, text: &str) {
        writer.append_text(text).unwrap();
    }

    #[test]
    fn mut_ref_blanket_impl_works() {
        let mut device = TestDevice::new();

        write_through(&mut device, "ref_data");
        assert_eq!(device.fetch_current_text().unwrap(), "ref_data");
    }

    #[test]
    fn box_dyn_works() {
        let mut boxed: Box<dyn TextDevice> = Box::new(TestDevice::new());

        boxed.append_text("dyn").unwrap();
        boxed.append_text("_data").unwrap();
        assert_eq!(boxed.fetch_current_text().unwrap(), "dyn_data");
    }
}
