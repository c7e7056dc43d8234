//! File-backed TextBus device.
//!
//! The whole file is the shared buffer. Full replacements rewrite the file,
//! appends open it in append mode, and a file that does not exist yet reads
//! as an empty buffer.

mod local_disk;

pub use local_disk::{FileText, FileTextError};
