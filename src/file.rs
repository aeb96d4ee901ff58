//! Metadata of the currently selected file.
//!
//! Only the name and the size are ever inspected; the file content itself is
//! never read by this crate.

use std::fmt;

/// The file currently held by the upload control. Rebuilt wholesale from the
/// input's file list on every change event, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    size: u64,
}

impl SelectedFile {
    /// Creates the metadata pair for the file the user picked.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Returns the filename as reported by the file picker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the lowercased extension, dot included, taken from the last
    /// dot onward. A name without a dot has no extension. A name ending in a
    /// bare dot yields `"."`, which never matches a configured extension.
    pub fn extension(&self) -> Option<String> {
        let lowered = self.name.to_lowercase();
        lowered.rfind('.').map(|index| lowered[index..].to_string())
    }
}

impl fmt::Display for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.name, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_extraction() {
        let cases = vec![
            ("report.pdf", Some(".pdf")),
            ("REPORT.PDF", Some(".pdf")),
            ("archive.tar.gz", Some(".gz")),
            ("report", None),
            ("trailing.", Some(".")),
            (".hidden", Some(".hidden")),
        ];

        for (name, expected) in cases {
            let file = SelectedFile::new(name, 1);
            assert_eq!(
                file.extension().as_deref(),
                expected,
                "Unexpected extension for filename {}",
                name
            );
        }
    }

    #[test]
    fn test_accessors() {
        let file = SelectedFile::new("report.pdf", 1000);
        assert_eq!(file.name(), "report.pdf");
        assert_eq!(file.size(), 1000);
    }

    #[test]
    fn test_display() {
        let file = SelectedFile::new("report.pdf", 1000);
        assert_eq!(file.to_string(), "report.pdf (1000 bytes)");
    }
}
