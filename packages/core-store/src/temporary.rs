//! Temporary records: appended at the tail, consumed oldest-first.
//!
//! Temporary records live after the static prefix. Writers append them
//! without reading the buffer; readers remove the first match.

use crate::format::{DataType, Layout, RecordKind};
use crate::locator::Step;
use crate::{Error, RecordId};

impl Layout {
    /// Encode a temporary record for appending to the tail of a buffer.
    ///
    /// Duplicates are allowed; each call produces one more queued record.
    pub fn append_temporary(
        &self,
        id: &RecordId,
        data_type: DataType,
        payload: &str,
    ) -> Result<String, Error> {
        self.encode_record(RecordKind::Temporary, id, data_type, payload)
    }

    /// Remove the oldest temporary record `(id, data_type)` from `buffer`.
    ///
    /// Returns the record's payload and the buffer without that record, or
    /// `None` when no such record is queued. Static records and all other
    /// temporary records are kept byte for byte.
    ///
    /// # Example
    ///
    /// ```rust
    /// use textbus_core_store::{record_id, DataType, Layout};
    ///
    /// let layout = Layout::default();
    /// let cmd = record_id!("cmd");
    ///
    /// let mut buffer = String::new();
    /// buffer.push_str(&layout.append_temporary(&cmd, DataType::String, "first").unwrap());
    /// buffer.push_str(&layout.append_temporary(&cmd, DataType::String, "second").unwrap());
    ///
    /// let (payload, rest) = layout.take_temporary(&buffer, &cmd, DataType::String).unwrap();
    /// assert_eq!(payload, "first");
    /// assert_eq!(rest, "Tcmd             Ssecond\n");
    /// ```
    pub fn take_temporary<'a>(
        &self,
        buffer: &'a str,
        id: &RecordId,
        data_type: DataType,
    ) -> Option<(&'a str, String)> {
        let mut pos = self.static_prefix_end(buffer, 0);
        while pos < buffer.len() {
            match self.step(buffer, pos, RecordKind::Temporary, id, data_type) {
                Step::Found(span) => {
                    log::debug!(
                        "taking temporary {} record '{}' at offset {}",
                        data_type,
                        id,
                        span.start
                    );
                    let mut rest = String::with_capacity(buffer.len() - (span.end - span.start));
                    rest.push_str(&buffer[..span.start]);
                    rest.push_str(&buffer[span.end..]);
                    return Some((&buffer[span.payload], rest));
                }
                Step::Skip(next) => pos = next,
                Step::OtherKind => pos = self.skip_record(buffer, pos)?,
                Step::End => return None,
            }
        }
        None
    }
}
