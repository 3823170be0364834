use std::fmt;

use crate::{Error, Result};

/// Content of the progress line.
///
/// The line is erased with a single carriage return and clear-to-end-of-line,
/// which only reaches one visual line, so text containing `\n` or `\r` is
/// rejected. An empty text means "no progress".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProgressText(String);

impl ProgressText {
    /// Validates `text` as a single-line progress message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultilineProgress`] if `text` contains a line
    /// terminator.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.contains(['\n', '\r']) {
            return Err(Error::MultilineProgress(text));
        }
        Ok(Self(text))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<str> for ProgressText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgressText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ProgressText {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for ProgressText {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}
