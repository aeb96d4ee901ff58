//! Per-page validation configuration.
//!
//! The page template exposes the upload constraints as plain markup
//! attributes: a byte limit in `data-max-file-size` and a comma-separated,
//! case-insensitive extension list in `file-extensions`. This module parses
//! those raw strings once, at page load, into an immutable context that the
//! rule engine reads for the rest of the page's lifetime.

use thiserror::Error;

/// Errors raised while building a [`ValidationContext`] from markup
/// attributes. These are page-authoring mistakes, not user-input failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("file size limit is not a positive integer: {0:?}")]
    InvalidMaxFileSize(String),

    #[error("extension list is empty")]
    EmptyExtensionList,

    #[error("extension list contains an empty entry")]
    EmptyExtension,

    #[error("file input id is empty")]
    EmptyInputId,
}

/// Immutable upload constraints for one page, constructed once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    max_file_size: u64,
    allowed_extensions: Vec<String>,
    input_id: String,
}

impl ValidationContext {
    /// Builds the context from already-typed values, normalizing the
    /// extension list: entries are trimmed, lowercased, and given a leading
    /// dot when the markup omitted one.
    pub fn new<I, S>(
        max_file_size: u64,
        allowed_extensions: I,
        input_id: &str,
    ) -> Result<Self, ContextError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if max_file_size == 0 {
            return Err(ContextError::InvalidMaxFileSize("0".to_string()));
        }
        if input_id.trim().is_empty() {
            return Err(ContextError::EmptyInputId);
        }

        let mut normalized = Vec::new();
        for entry in allowed_extensions {
            let entry = entry.as_ref().trim().to_lowercase();
            if entry.is_empty() || entry == "." {
                return Err(ContextError::EmptyExtension);
            }
            if entry.starts_with('.') {
                normalized.push(entry);
            } else {
                normalized.push(format!(".{}", entry));
            }
        }
        if normalized.is_empty() {
            return Err(ContextError::EmptyExtensionList);
        }

        Ok(Self {
            max_file_size,
            allowed_extensions: normalized,
            input_id: input_id.trim().to_string(),
        })
    }

    /// Builds the context from the raw attribute strings the template
    /// supplies (`data-max-file-size`, `file-extensions`) plus the id of the
    /// file input control.
    pub fn from_markup(
        max_file_size: &str,
        file_extensions: &str,
        input_id: &str,
    ) -> Result<Self, ContextError> {
        let max_file_size: u64 = max_file_size
            .trim()
            .parse()
            .map_err(|_| ContextError::InvalidMaxFileSize(max_file_size.to_string()))?;

        Self::new(max_file_size, file_extensions.split(','), input_id)
    }

    /// Returns the size ceiling in bytes.
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Returns the size ceiling in megabytes, unrounded. This is the value
    /// interpolated into the too-large message.
    pub fn max_file_size_megabytes(&self) -> f64 {
        self.max_file_size as f64 / 1024.0 / 1024.0
    }

    /// Returns the normalized extension whitelist, each entry lowercase with
    /// its leading dot.
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    /// Checks an already-lowercased extension (dot included) against the
    /// whitelist.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed == extension)
    }

    /// Returns the id of the file input control, used as the anchor target
    /// for summary links and the aria-describedby relationship.
    pub fn input_id(&self) -> &str {
        &self.input_id
    }
}
