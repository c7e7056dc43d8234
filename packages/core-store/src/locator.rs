//! Linear scan over the static-record prefix.
//!
//! Every lookup walks the buffer from the front. The cost is bounded by the
//! length of the static prefix: the scan stops at the first record that is
//! not static, and each step either matches or moves past one terminator.

use crate::format::{DataType, Layout, RecordKind};
use crate::record::RecordSpan;
use crate::RecordId;

/// Outcome of comparing one record header against a target.
pub(crate) enum Step {
    /// The header matched; the record is complete.
    Found(RecordSpan),
    /// The kind tag differs; nothing was consumed.
    OtherKind,
    /// Id or data type differ; the next record starts here.
    Skip(usize),
    /// The buffer ended before the record did.
    End,
}

impl Layout {
    /// Find the static record `(id, data_type)` and return its start offset.
    ///
    /// Scanning starts at `start`, which must be a record boundary. Returns
    /// `None` when a non-static record is reached first, when the buffer ends,
    /// or when `start` is not a character boundary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use textbus_core_store::{record_id, DataType, Layout};
    ///
    /// let buffer = "Sa               I5\nSa               F5\n";
    /// let layout = Layout::default();
    ///
    /// assert_eq!(layout.find_static(buffer, &record_id!("a"), DataType::Int, 0), Some(0));
    /// assert_eq!(layout.find_static(buffer, &record_id!("a"), DataType::Float, 0), Some(20));
    /// assert_eq!(layout.find_static(buffer, &record_id!("a"), DataType::String, 0), None);
    /// ```
    pub fn find_static(
        &self,
        buffer: &str,
        id: &RecordId,
        data_type: DataType,
        start: usize,
    ) -> Option<usize> {
        self.locate_static(buffer, id, data_type, start)
            .map(|span| span.start)
    }

    /// Like [`Layout::find_static`], returning the full span of the record.
    pub fn locate_static(
        &self,
        buffer: &str,
        id: &RecordId,
        data_type: DataType,
        start: usize,
    ) -> Option<RecordSpan> {
        let mut pos = start;
        while pos < buffer.len() {
            match self.step(buffer, pos, RecordKind::Static, id, data_type) {
                Step::Found(span) => return Some(span),
                Step::Skip(next) => pos = next,
                Step::OtherKind => {
                    log::trace!("static scan for '{}' stopped at offset {}", id, pos);
                    return None;
                }
                Step::End => return None,
            }
        }
        None
    }

    /// Payload of the static record `(id, data_type)`, borrowed from `buffer`.
    pub fn extract_static<'a>(
        &self,
        buffer: &'a str,
        id: &RecordId,
        data_type: DataType,
    ) -> Option<&'a str> {
        self.locate_static(buffer, id, data_type, 0)
            .map(|span| &buffer[span.payload])
    }

    /// Offset of the first record at or after `start` that is not static.
    ///
    /// This is where temporary records begin. Returns the buffer length when
    /// the whole buffer is static.
    pub fn static_prefix_end(&self, buffer: &str, start: usize) -> usize {
        let mut pos = start;
        while pos < buffer.len() {
            match buffer.get(pos..) {
                Some(rest) if rest.starts_with(RecordKind::Static.tag()) => {}
                _ => return pos,
            }
            match self.skip_record(buffer, pos) {
                Some(next) => pos = next,
                None => return buffer.len(),
            }
        }
        pos
    }

    /// Offset just past the terminator of the record starting at `start`.
    pub(crate) fn skip_record(&self, buffer: &str, start: usize) -> Option<usize> {
        let rest = buffer.get(start..)?;
        // The first character is a tag; a terminator there would end an empty record.
        let first = rest.chars().next()?;
        if first == self.terminator() {
            return Some(start + first.len_utf8());
        }
        let from = start + first.len_utf8();
        buffer[from..]
            .find(self.terminator())
            .map(|i| from + i + self.terminator().len_utf8())
    }

    /// Compare the record header at `pos` with `(kind, id, data_type)`.
    ///
    /// Characters are compared one at a time against the padded id, stopping
    /// at the first mismatch.
    pub(crate) fn step(
        &self,
        buffer: &str,
        pos: usize,
        kind: RecordKind,
        id: &RecordId,
        data_type: DataType,
    ) -> Step {
        let Some(rest) = buffer.get(pos..) else {
            return Step::End;
        };
        let mut chars = rest.char_indices();

        match chars.next() {
            Some((_, tag)) if tag == kind.tag() => {}
            Some(_) => return Step::OtherKind,
            None => return Step::End,
        }

        let mut mismatch = None;
        for expected in id.as_str().chars() {
            match chars.next() {
                Some((_, c)) if c == expected => {}
                Some(found) => {
                    mismatch = Some(found);
                    break;
                }
                None => return Step::End,
            }
        }

        if mismatch.is_none() {
            match chars.next() {
                Some((offset, tag)) if tag == data_type.tag() => {
                    let payload_start = pos + offset + tag.len_utf8();
                    let Some(len) = buffer[payload_start..].find(self.terminator()) else {
                        return Step::End;
                    };
                    let terminator = payload_start + len;
                    return Step::Found(RecordSpan {
                        start: pos,
                        payload: payload_start..terminator,
                        end: terminator + self.terminator().len_utf8(),
                    });
                }
                Some(found) => mismatch = Some(found),
                None => return Step::End,
            }
        }

        // Move past the remainder of this record. The mismatching character
        // may itself be the terminator of a short record.
        let next = match mismatch {
            Some((offset, c)) if c == self.terminator() => Some((offset, c)),
            _ => chars.find(|&(_, c)| c == self.terminator()),
        };
        match next {
            Some((offset, c)) => Step::Skip(pos + offset + c.len_utf8()),
            None => Step::End,
        }
    }
}
