//! In-memory text device.

use crate::{DeviceError, TextReader, TextWriter};

/// A text device that lives in process memory.
///
/// Besides holding the text it counts how the blob was written, so callers
/// can tell a full replacement from an append.
///
/// # Example
///
/// ```rust
/// use textbus_ll_store::{InMemoryText, TextReader, TextWriter};
///
/// let mut device = InMemoryText::new();
/// device.append_text("Tqueue           Ix\n").unwrap();
///
/// assert_eq!(device.appends(), 1);
/// assert_eq!(device.fetch_current_text().unwrap(), "Tqueue           Ix\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryText {
    text: String,
    replaces: usize,
    appends: usize,
}

impl InMemoryText {
    /// Create an empty device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a device with initial contents.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Borrow the current contents without taking a snapshot.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of full replacements committed so far.
    pub fn replaces(&self) -> usize {
        self.replaces
    }

    /// Number of appends committed so far.
    pub fn appends(&self) -> usize {
        self.appends
    }
}

impl TextReader for InMemoryText {
    fn fetch_current_text(&mut self) -> Result<String, DeviceError> {
        Ok(self.text.clone())
    }
}

impl TextWriter for InMemoryText {
    fn replace_text(&mut self, text: &str) -> Result<(), DeviceError> {
        self.text.clear();
        self.text.push_str(text);
        self.replaces += 1;
        Ok(())
    }

    fn append_text(&mut self, text: &str) -> Result<(), DeviceError> {
        self.text.push_str(text);
        self.appends += 1;
        Ok(())
    }
}
