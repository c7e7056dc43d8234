//! Bus configuration.

use serde::{Deserialize, Serialize};

use crate::format::{DataType, Layout, RecordKind, DEFAULT_TERMINATOR, RECORD_SEPARATOR};
use crate::Error;

/// Non-digit characters that encoded or accepted int and float payloads use,
/// including the `inf` and `NaN` spellings.
const NUMERIC_PUNCTUATION: &str = "+-.eEinfNa";

/// Settings shared by every party that reads or writes one buffer.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
///
/// # Example
///
/// ```rust
/// use textbus_core_store::BusConfig;
///
/// let config: BusConfig = serde_json::from_str(r#"{"terminator": "\u001e"}"#).unwrap();
/// assert_eq!(config, BusConfig::record_separator());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// The single character that ends every record.
    pub terminator: char,
}

impl BusConfig {
    /// Configuration using the ASCII record separator as terminator.
    pub fn record_separator() -> Self {
        BusConfig {
            terminator: RECORD_SEPARATOR,
        }
    }

    /// Check that the terminator cannot be confused with grammar characters.
    pub fn validate(&self) -> Result<(), Error> {
        let t = self.terminator;
        if t == ' ' {
            return Err(Error::Config {
                message: "terminator cannot be the identifier padding character".to_string(),
            });
        }

        let is_kind_tag = RecordKind::from_tag(t).is_some();
        let is_data_type_tag = DataType::from_tag(t).is_some();
        if is_kind_tag || is_data_type_tag {
            return Err(Error::Config {
                message: format!("terminator {:?} collides with a record tag", t),
            });
        }

        if t.is_ascii_digit() || NUMERIC_PUNCTUATION.contains(t) {
            return Err(Error::Config {
                message: format!("terminator {:?} can appear in a numeric payload", t),
            });
        }

        Ok(())
    }

    /// Validate and build the layout for this configuration.
    pub fn layout(&self) -> Result<Layout, Error> {
        Layout::new(self.terminator)
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        BusConfig {
            terminator: DEFAULT_TERMINATOR,
        }
    }
}
