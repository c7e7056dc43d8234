//! Wire grammar constants and the `Layout` that carries them.

use std::fmt;

use crate::{BusConfig, Error};

/// Width of every record identifier, in characters.
pub const ID_WIDTH: usize = 16;

/// Default record terminator.
pub const DEFAULT_TERMINATOR: char = '\n';

/// ASCII record separator, the alternative terminator for hosts whose
/// payloads need newlines.
pub const RECORD_SEPARATOR: char = '\x1E';

/// The first character of every record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Created once, then only overwritten in place.
    Static,
    /// Appended at the tail, consumed oldest-first.
    Temporary,
}

impl RecordKind {
    /// The tag character on the wire.
    pub const fn tag(self) -> char {
        match self {
            RecordKind::Static => 'S',
            RecordKind::Temporary => 'T',
        }
    }

    /// Parse a tag character.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'S' => Some(RecordKind::Static),
            'T' => Some(RecordKind::Temporary),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Static => write!(f, "static"),
            RecordKind::Temporary => write!(f, "temporary"),
        }
    }
}

/// The payload type tag that follows the identifier.
///
/// The data type is part of a record's identity: `("x", Int)` and
/// `("x", Float)` are different records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Float,
    String,
}

impl DataType {
    /// The tag character on the wire.
    pub const fn tag(self) -> char {
        match self {
            DataType::Int => 'I',
            DataType::Float => 'F',
            DataType::String => 'S',
        }
    }

    /// Parse a tag character.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'I' => Some(DataType::Int),
            'F' => Some(DataType::Float),
            'S' => Some(DataType::String),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::Float => write!(f, "float"),
            DataType::String => write!(f, "string"),
        }
    }
}

/// The concrete grammar a buffer is written in.
///
/// Only the terminator varies between layouts. Codec, locator and mutator
/// operations are methods on `Layout` so that a buffer is always read with the
/// same terminator it was written with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    terminator: char,
}

impl Layout {
    /// Create a layout with the given terminator.
    ///
    /// Fails if the terminator could be confused with a tag or with id padding.
    pub fn new(terminator: char) -> Result<Self, Error> {
        BusConfig { terminator }.validate()?;
        Ok(Layout { terminator })
    }

    /// The record terminator.
    pub fn terminator(&self) -> char {
        self.terminator
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            terminator: DEFAULT_TERMINATOR,
        }
    }
}
