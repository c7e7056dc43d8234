//! Fixed-width record identifiers.

use std::fmt;

use crate::format::ID_WIDTH;
use crate::Error;

/// A record identifier, right-padded with spaces to exactly `ID_WIDTH`
/// characters.
///
/// Padding happens once, at construction, so lookups compare the stored form
/// directly against the buffer. Two ids that differ only in trailing spaces
/// are the same id.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordId {
    padded: String,
}

impl RecordId {
    /// Validate and pad an identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textbus_core_store::RecordId;
    ///
    /// let id = RecordId::new("Cmd.Clock").unwrap();
    /// assert_eq!(id.as_str(), "Cmd.Clock       ");
    /// assert_eq!(id.trimmed(), "Cmd.Clock");
    ///
    /// assert!(RecordId::new("seventeen-letters").is_err());
    /// ```
    pub fn new(id: &str) -> Result<Self, Error> {
        let width = id.chars().count();
        if width > ID_WIDTH {
            return Err(Error::IdentifierTooLong {
                id: id.to_string(),
                width: ID_WIDTH,
            });
        }

        let mut padded = String::with_capacity(id.len() + ID_WIDTH - width);
        padded.push_str(id);
        padded.extend(std::iter::repeat(' ').take(ID_WIDTH - width));
        Ok(RecordId { padded })
    }

    /// The padded, on-the-wire form.
    pub fn as_str(&self) -> &str {
        &self.padded
    }

    /// The identifier without its right padding.
    pub fn trimmed(&self) -> &str {
        self.padded.trim_end_matches(' ')
    }

    /// Check whether the identifier contains `c`.
    pub fn contains(&self, c: char) -> bool {
        self.padded.contains(c)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.trimmed())
    }
}

impl TryFrom<&str> for RecordId {
    type Error = Error;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        RecordId::new(id)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.padded
    }
}

/// Create a `RecordId` from a literal.
///
/// # Panics
///
/// Panics if the literal is wider than `ID_WIDTH`.
#[macro_export]
macro_rules! record_id {
    ($s:expr) => {
        $crate::RecordId::new($s).expect("invalid record id literal")
    };
}
