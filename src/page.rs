//! An in-memory model of the page surface.
//!
//! Mirrors the markup contract of the upload form: a form group that takes
//! an error styling class, an inline error slot, an error summary region
//! that hides itself while empty, the aria-describedby link on the input,
//! the document title, and the submit control. Implements
//! [`ErrorSurface`](crate::render::ErrorSurface) so validator and presenter
//! can be exercised without a live DOM.

use crate::render::ErrorSurface;

/// One entry in the error summary list: a link to the offending field and
/// the lines it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub href: String,
    pub lines: Vec<String>,
}

/// The observable state of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    base_title: String,
    title_prefix: Option<String>,
    group_has_error: bool,
    inline_lines: Vec<String>,
    summary_entries: Vec<SummaryEntry>,
    described_by: Option<(String, String)>,
    focused: Option<String>,
    submit_enabled: bool,
    selected_value: Option<String>,
}

impl PageModel {
    /// Creates a pristine page with the given document title.
    pub fn new(title: &str) -> Self {
        Self {
            base_title: title.to_string(),
            title_prefix: None,
            group_has_error: false,
            inline_lines: Vec::new(),
            summary_entries: Vec::new(),
            described_by: None,
            focused: None,
            submit_enabled: true,
            selected_value: None,
        }
    }

    /// Records the value the host would see in the file input. Hosts call
    /// this when the user picks a file.
    pub fn set_selected_value(&mut self, value: &str) {
        self.selected_value = Some(value.to_string());
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected_value.as_deref()
    }

    pub fn group_has_error(&self) -> bool {
        self.group_has_error
    }

    pub fn inline_lines(&self) -> &[String] {
        &self.inline_lines
    }

    pub fn summary_entries(&self) -> &[SummaryEntry] {
        &self.summary_entries
    }

    /// The summary region is visible exactly while it holds entries.
    pub fn summary_visible(&self) -> bool {
        !self.summary_entries.is_empty()
    }

    /// Returns the id of the element describing the input, if the input
    /// currently carries the accessibility link.
    pub fn described_by(&self, input_id: &str) -> Option<&str> {
        match &self.described_by {
            Some((input, description)) if input == input_id => Some(description),
            _ => None,
        }
    }

    /// Returns the document title as the browser tab would show it.
    pub fn title(&self) -> String {
        match &self.title_prefix {
            Some(prefix) => format!("{}{}", prefix, self.base_title),
            None => self.base_title.clone(),
        }
    }

    /// Returns the anchor of the currently focused element, if any.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }
}

impl ErrorSurface for PageModel {
    fn set_group_error_state(&mut self, active: bool) {
        self.group_has_error = active;
    }

    fn set_inline_message(&mut self, lines: &[String]) {
        self.inline_lines = lines.to_vec();
    }

    fn clear_inline_message(&mut self) {
        self.inline_lines.clear();
    }

    fn push_summary_entry(&mut self, target_id: &str, lines: &[String]) {
        self.summary_entries.push(SummaryEntry {
            href: format!("#{}", target_id),
            lines: lines.to_vec(),
        });
    }

    fn clear_summary(&mut self) {
        self.summary_entries.clear();
    }

    fn set_described_by(&mut self, input_id: &str, description_id: &str) {
        self.described_by = Some((input_id.to_string(), description_id.to_string()));
    }

    fn clear_described_by(&mut self, input_id: &str) {
        if self.described_by(input_id).is_some() {
            self.described_by = None;
        }
    }

    fn set_title_prefix(&mut self, prefix: &str) {
        self.title_prefix = Some(prefix.to_string());
    }

    fn clear_title_prefix(&mut self) {
        self.title_prefix = None;
    }

    fn focus_latest_summary_entry(&mut self) {
        if let Some(entry) = self.summary_entries.last() {
            self.focused = Some(entry.href.clone());
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn clear_file_selection(&mut self) {
        self.selected_value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pristine_page() {
        let page = PageModel::new("Upload your file");
        assert_eq!(page.title(), "Upload your file");
        assert!(!page.group_has_error());
        assert!(!page.summary_visible());
        assert!(page.submit_enabled());
        assert_eq!(page.focused(), None);
    }

    #[test]
    fn test_summary_visibility_follows_entries() {
        let mut page = PageModel::new("Upload");
        assert!(!page.summary_visible());

        page.push_summary_entry("upload", &["oops".to_string()]);
        assert!(page.summary_visible());
        assert_eq!(page.summary_entries()[0].href, "#upload");

        page.clear_summary();
        assert!(!page.summary_visible());
    }

    #[test]
    fn test_title_prefix_round_trip() {
        let mut page = PageModel::new("Upload");
        page.set_title_prefix("Error: ");
        assert_eq!(page.title(), "Error: Upload");

        // Re-applying must not stack prefixes.
        page.set_title_prefix("Error: ");
        assert_eq!(page.title(), "Error: Upload");

        page.clear_title_prefix();
        assert_eq!(page.title(), "Upload");
    }

    #[test]
    fn test_described_by_is_scoped_to_the_input() {
        let mut page = PageModel::new("Upload");
        page.set_described_by("upload", "upload-error");
        assert_eq!(page.described_by("upload"), Some("upload-error"));
        assert_eq!(page.described_by("other"), None);

        page.clear_described_by("other");
        assert_eq!(page.described_by("upload"), Some("upload-error"));

        page.clear_described_by("upload");
        assert_eq!(page.described_by("upload"), None);
    }

    #[test]
    fn test_focus_without_entries_is_a_no_op() {
        let mut page = PageModel::new("Upload");
        page.focus_latest_summary_entry();
        assert_eq!(page.focused(), None);
    }
}
