//! Typed message catalog.
//!
//! The page historically looked error text up in an untyped key→template map
//! supplied by the host. Here every [`ErrorKind`] maps to a template through
//! an exhaustive match, and a template is an ordered list of lines rather
//! than a string with an embedded break marker. Hosts can still supply a
//! localized catalog by deserializing one; the compiled-in default carries
//! the English templates.
//!
//! Templates hold at most a single `{0}` placeholder, substituted verbatim
//! with the interpolated value.

use std::fmt;

use serde::Deserialize;

use crate::context::ValidationContext;
use crate::rules::ErrorKind;

const PLACEHOLDER: &str = "{0}";

/// A rendered validation message: one or more lines of plain text. The
/// renderer turns line boundaries into real line breaks, never markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    lines: Vec<String>,
}

impl Message {
    /// Builds a single-line message.
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    /// Builds a message from its lines. Empty input collapses to one empty
    /// line so a message always has at least one line to render.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            Self::single("")
        } else {
            Self { lines }
        }
    }

    /// Returns the ordered lines of the message.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// The templates for every error kind plus the two page-level strings: the
/// summary region heading and the screen-reader prefix prepended to the
/// document title while an error is active.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessageCatalog {
    pub not_selected: Vec<String>,
    pub invalid_name: Vec<String>,
    pub empty_file: Vec<String>,
    pub too_large: Vec<String>,
    pub bad_extension: Vec<String>,
    pub summary_heading: String,
    pub error_prefix: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            not_selected: vec!["Select a file".to_string()],
            invalid_name: vec![
                "File name must start with a letter or number,".to_string(),
                "and only contain hyphen, underscore or dot as special characters".to_string(),
            ],
            empty_file: vec!["The selected file is empty".to_string()],
            too_large: vec!["File size must not be bigger than {0} Megabytes (MB)".to_string()],
            bad_extension: vec!["File must have an extension of {0}".to_string()],
            summary_heading: "There is a problem".to_string(),
            error_prefix: "Error: ".to_string(),
        }
    }
}

impl MessageCatalog {
    /// Renders the message for one error kind, interpolating the context
    /// value the template calls for: the megabyte limit for `TooLarge`, the
    /// comma-joined whitelist for `BadExtension`, nothing for the rest.
    pub fn render(&self, kind: ErrorKind, context: &ValidationContext) -> Message {
        match kind {
            ErrorKind::NotSelected => Message::from_lines(self.not_selected.clone()),
            ErrorKind::InvalidName => Message::from_lines(self.invalid_name.clone()),
            ErrorKind::EmptyFile => Message::from_lines(self.empty_file.clone()),
            ErrorKind::TooLarge => interpolate(
                &self.too_large,
                &context.max_file_size_megabytes().to_string(),
            ),
            ErrorKind::BadExtension => {
                interpolate(&self.bad_extension, &context.allowed_extensions().join(", "))
            }
        }
    }

    /// Returns the heading of the error summary region.
    pub fn summary_heading(&self) -> &str {
        &self.summary_heading
    }

    /// Returns the localized marker prepended to the document title while an
    /// error is shown.
    pub fn error_prefix(&self) -> &str {
        &self.error_prefix
    }
}

/// Substitutes `{0}` with the value, verbatim, in every line that carries it.
fn interpolate(template: &[String], value: &str) -> Message {
    Message::from_lines(
        template
            .iter()
            .map(|line| line.replace(PLACEHOLDER, value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn context() -> ValidationContext {
        ValidationContext::from_markup("5000000", ".pdf,.docx", "upload").unwrap()
    }

    #[test]
    fn test_default_catalog_covers_every_kind() {
        let catalog = MessageCatalog::default();
        let ctx = context();

        for kind in ErrorKind::iter() {
            let message = catalog.render(kind, &ctx);
            assert!(
                !message.lines().is_empty() && !message.lines()[0].is_empty(),
                "No template for {:?}",
                kind
            );
        }
    }

    #[test]
    fn test_invalid_name_is_two_lines() {
        let message = MessageCatalog::default().render(ErrorKind::InvalidName, &context());
        assert_eq!(message.lines().len(), 2);
    }

    #[test]
    fn test_too_large_interpolates_unrounded_megabytes() {
        let message = MessageCatalog::default().render(ErrorKind::TooLarge, &context());
        assert_eq!(
            message.lines(),
            &["File size must not be bigger than 4.76837158203125 Megabytes (MB)"]
        );
    }

    #[test]
    fn test_bad_extension_joins_whitelist() {
        let message = MessageCatalog::default().render(ErrorKind::BadExtension, &context());
        assert_eq!(message.lines(), &["File must have an extension of .pdf, .docx"]);
    }

    #[test]
    fn test_interpolation_is_verbatim() {
        // The substituted value must not be treated as a pattern.
        let message = interpolate(&["limit is {0}".to_string()], "$1\\d+");
        assert_eq!(message.lines(), &["limit is $1\\d+"]);
    }

    #[test]
    fn test_localized_catalog_deserializes_over_defaults() {
        let catalog: MessageCatalog = serde_json::from_str(
            r#"{
                "not_selected": ["Choisissez un fichier"],
                "error_prefix": "Erreur : "
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.not_selected, vec!["Choisissez un fichier"]);
        assert_eq!(catalog.error_prefix(), "Erreur : ");
        // Unspecified keys fall back to the compiled-in templates.
        assert_eq!(catalog.empty_file, MessageCatalog::default().empty_file);
    }

    #[test]
    fn test_message_display_joins_lines() {
        let message = Message::from_lines(["one", "two"]);
        assert_eq!(message.to_string(), "one\ntwo");
    }
}
