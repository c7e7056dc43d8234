use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use textbus_ll_store::{DeviceError, TextReader, TextWriter};

/// Errors raised while opening a file device.
#[derive(Debug, Error)]
pub enum FileTextError {
    #[error("parent directory of {path} is not usable: {error}")]
    ParentInvalid { path: PathBuf, error: io::Error },

    #[error("{path} exists but is not a regular file")]
    NotAFile { path: PathBuf },
}

/// A text device stored in one file.
pub struct FileText {
    path: PathBuf,
}

impl FileText {
    /// Open a device at `path`.
    ///
    /// The file itself may be missing; its directory must exist and be
    /// writable.
    pub fn new(path: impl Into<PathBuf>) -> Result<FileText, FileTextError> {
        let path = path.into();

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let attr = fs::metadata(&parent).map_err(|error| FileTextError::ParentInvalid {
            path: path.clone(),
            error,
        })?;

        if !attr.is_dir() {
            return Err(FileTextError::ParentInvalid {
                path,
                error: io::Error::other("parent path must be a directory"),
            });
        }

        if attr.permissions().readonly() {
            return Err(FileTextError::ParentInvalid {
                path,
                error: io::Error::other("parent directory must be writable"),
            });
        }

        if path.exists() && !path.is_file() {
            return Err(FileTextError::NotAFile { path });
        }

        Ok(FileText { path })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextReader for FileText {
    fn fetch_current_text(&mut self) -> Result<String, DeviceError> {
        log::debug!("Reading {}...", self.path.display());
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl TextWriter for FileText {
    fn replace_text(&mut self, text: &str) -> Result<(), DeviceError> {
        log::debug!("Writing {} ({} bytes)...", self.path.display(), text.len());
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn append_text(&mut self, text: &str) -> Result<(), DeviceError> {
        log::debug!("Appending {} bytes to {}...", text.len(), self.path.display());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }
}
