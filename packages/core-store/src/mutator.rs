//! Rebuild-on-write for static records.

use crate::format::{DataType, Layout, RecordKind};
use crate::{Error, RecordId};

impl Layout {
    /// Return `buffer` with the static record `(id, data_type)` set to `payload`.
    ///
    /// An existing record is replaced where it stands; every other byte is
    /// kept. A missing record is inserted at the very front, which keeps all
    /// static records ahead of the temporary ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use textbus_core_store::{record_id, DataType, Layout};
    ///
    /// let layout = Layout::default();
    /// let a = record_id!("a");
    ///
    /// let buffer = layout.write_static("", &a, DataType::Float, "0.25").unwrap();
    /// let buffer = layout.write_static(&buffer, &a, DataType::Float, "0.5").unwrap();
    /// assert_eq!(buffer, "Sa               F0.5\n");
    /// ```
    pub fn write_static(
        &self,
        buffer: &str,
        id: &RecordId,
        data_type: DataType,
        payload: &str,
    ) -> Result<String, Error> {
        let record = self.encode_record(RecordKind::Static, id, data_type, payload)?;

        let rebuilt = match self.locate_static(buffer, id, data_type, 0) {
            None => {
                log::debug!("inserting static {} record '{}'", data_type, id);
                let mut out = String::with_capacity(record.len() + buffer.len());
                out.push_str(&record);
                out.push_str(buffer);
                out
            }
            Some(span) => {
                log::debug!(
                    "overwriting static {} record '{}' at offset {}",
                    data_type,
                    id,
                    span.start
                );
                let tail = &buffer[span.end..];
                let mut out = String::with_capacity(span.start + record.len() + tail.len());
                out.push_str(&buffer[..span.start]);
                out.push_str(&record);
                out.push_str(tail);
                out
            }
        };
        Ok(rebuilt)
    }
}
