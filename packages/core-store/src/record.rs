//! Parsed views of records inside a buffer.

use std::ops::Range;

use crate::format::{DataType, Layout, RecordKind, ID_WIDTH};
use crate::Error;

/// Byte offsets of one complete record within a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSpan {
    /// Offset of the kind tag.
    pub start: usize,
    /// Offsets of the payload, excluding the terminator.
    pub payload: Range<usize>,
    /// Offset just past the terminator, where the next record starts.
    pub end: usize,
}

/// A record borrowed from a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordView<'a> {
    pub kind: RecordKind,
    /// The identifier as stored, padding included.
    pub id: &'a str,
    pub data_type: DataType,
    pub payload: &'a str,
    pub span: RecordSpan,
}

impl RecordView<'_> {
    /// The identifier without its right padding.
    pub fn trimmed_id(&self) -> &str {
        self.id.trim_end_matches(' ')
    }
}

/// Iterator over every record of a buffer, static and temporary.
///
/// Unlike the static locator, which only needs ids and tags to line up, this
/// checks the full grammar. The first violation is yielded as
/// `Error::Malformed` and ends the iteration.
///
/// # Example
///
/// ```rust
/// use textbus_core_store::{Layout, RecordKind};
///
/// let buffer = "Sa               F0.5\nTq               Igo\n";
/// let kinds: Vec<RecordKind> = Layout::default()
///     .records(buffer)
///     .map(|r| r.unwrap().kind)
///     .collect();
/// assert_eq!(kinds, vec![RecordKind::Static, RecordKind::Temporary]);
/// ```
pub struct Records<'a> {
    layout: Layout,
    buffer: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<RecordView<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.buffer.len() {
            return None;
        }

        match self.layout.parse_record(self.buffer, self.pos) {
            Ok(view) => {
                self.pos = view.span.end;
                Some(Ok(view))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl Layout {
    /// Iterate over all records in `buffer`.
    pub fn records<'a>(&self, buffer: &'a str) -> Records<'a> {
        Records {
            layout: *self,
            buffer,
            pos: 0,
            failed: false,
        }
    }

    /// Parse the record starting at byte offset `start`.
    pub fn parse_record<'a>(&self, buffer: &'a str, start: usize) -> Result<RecordView<'a>, Error> {
        let malformed = |offset: usize, message: &str| Error::Malformed {
            offset,
            message: message.to_string(),
        };

        let rest = buffer
            .get(start..)
            .ok_or_else(|| malformed(start, "offset is not a character boundary"))?;
        let mut chars = rest.char_indices();

        let kind = match chars.next() {
            Some((_, tag)) => RecordKind::from_tag(tag)
                .ok_or_else(|| malformed(start, &format!("unknown record kind tag {:?}", tag)))?,
            None => return Err(malformed(start, "empty record")),
        };

        let id_start = start + kind.tag().len_utf8();
        let mut id_end = id_start;
        for _ in 0..ID_WIDTH {
            match chars.next() {
                Some((_, c)) if c == self.terminator() => {
                    return Err(malformed(start, "identifier shorter than the id width"));
                }
                Some((offset, c)) => id_end = start + offset + c.len_utf8(),
                None => return Err(malformed(start, "truncated identifier")),
            }
        }

        let data_type = match chars.next() {
            Some((_, tag)) => DataType::from_tag(tag)
                .ok_or_else(|| malformed(start, &format!("unknown data type tag {:?}", tag)))?,
            None => return Err(malformed(start, "missing data type tag")),
        };

        let payload_start = id_end + data_type.tag().len_utf8();
        let terminator = buffer[payload_start..]
            .find(self.terminator())
            .map(|i| payload_start + i)
            .ok_or_else(|| malformed(start, "unterminated record"))?;

        Ok(RecordView {
            kind,
            id: &buffer[id_start..id_end],
            data_type,
            payload: &buffer[payload_start..terminator],
            span: RecordSpan {
                start,
                payload: payload_start..terminator,
                end: terminator + self.terminator().len_utf8(),
            },
        })
    }
}
