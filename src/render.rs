//! Error presentation.
//!
//! [`ErrorSurface`] is the seam between the validator and whatever actually
//! draws the page: a live DOM binding in the browser, or the in-memory
//! [`crate::page::PageModel`] in tests and embedders. The presenter owns the
//! current presentation state and guarantees the facets stay consistent: the
//! form group carries the error class, the summary region is visible, and
//! the document title carries the error prefix exactly when an error is
//! active.

use log::debug;

use crate::messages::Message;

/// Everything the presenter can do to the page. Implementations must make
/// each operation idempotent; the presenter may re-apply or re-clear a facet
/// that is already in the requested state.
pub trait ErrorSurface {
    /// Toggles the error styling class on the form group wrapping the input.
    fn set_group_error_state(&mut self, active: bool);

    /// Replaces the inline error slot next to the input with these lines,
    /// rendered with true line breaks.
    fn set_inline_message(&mut self, lines: &[String]);

    /// Empties the inline error slot.
    fn clear_inline_message(&mut self);

    /// Appends one entry to the page-level error summary list, linked to the
    /// element with `target_id`, with the same line-break-aware rendering as
    /// the inline slot. Making the summary region visible is the
    /// implementation's concern.
    fn push_summary_entry(&mut self, target_id: &str, lines: &[String]);

    /// Removes every summary entry and hides the summary region.
    fn clear_summary(&mut self);

    /// Links the input to its error text so assistive technology announces
    /// the error when the field receives focus.
    fn set_described_by(&mut self, input_id: &str, description_id: &str);

    /// Removes the accessibility link from the input.
    fn clear_described_by(&mut self, input_id: &str);

    /// Prefixes the document title with the localized error marker.
    fn set_title_prefix(&mut self, prefix: &str);

    /// Restores the document title.
    fn clear_title_prefix(&mut self);

    /// Moves keyboard focus to the newest summary link.
    fn focus_latest_summary_entry(&mut self);

    /// Enables or disables the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Empties the file input, forcing the user to reselect.
    fn clear_file_selection(&mut self);
}

/// What to do with the form while an error is shown. Exactly one strategy is
/// active per presenter; the default keeps the selection and disables the
/// submit control instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockStrategy {
    /// Disable the submit control until the error is cleared.
    #[default]
    DisableSubmit,
    /// Clear the file input so the user must pick another file.
    ClearSelection,
}

/// The presenter's view of what is currently on screen. `active` is true iff
/// every error facet is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorPresentationState {
    active: bool,
    message: Option<Message>,
    focus_target: Option<String>,
}

impl ErrorPresentationState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Returns the anchor the newest summary link points at, while an error
    /// is active.
    pub fn focus_target(&self) -> Option<&str> {
        self.focus_target.as_deref()
    }
}

/// Applies and reverses every visual, focus and accessibility side effect of
/// a validation error, as one unit.
pub struct ErrorPresenter<S: ErrorSurface> {
    surface: S,
    state: ErrorPresentationState,
    strategy: BlockStrategy,
    input_id: String,
    description_id: String,
    error_prefix: String,
}

impl<S: ErrorSurface> ErrorPresenter<S> {
    /// Wraps a surface. `input_id` anchors summary links and the
    /// accessibility relationship; the inline slot is addressed as
    /// `<input_id>-error`, per the markup contract.
    pub fn new(surface: S, input_id: &str, error_prefix: &str, strategy: BlockStrategy) -> Self {
        Self {
            surface,
            state: ErrorPresentationState::default(),
            strategy,
            input_id: input_id.to_string(),
            description_id: format!("{}-error", input_id),
            error_prefix: error_prefix.to_string(),
        }
    }

    /// Shows one error. Always starts from a clean slate so repeated calls
    /// never stack summary entries, then applies every facet together:
    /// group styling, inline message, summary entry, accessibility link,
    /// title prefix, focus, and the configured block strategy.
    pub fn show_error(&mut self, message: Message) {
        self.reset_error();

        self.surface.set_group_error_state(true);
        self.surface.set_inline_message(message.lines());
        self.surface.push_summary_entry(&self.input_id, message.lines());
        self.surface.set_described_by(&self.input_id, &self.description_id);
        self.surface.set_title_prefix(&self.error_prefix);
        self.surface.focus_latest_summary_entry();

        match self.strategy {
            BlockStrategy::DisableSubmit => self.surface.set_submit_enabled(false),
            BlockStrategy::ClearSelection => self.surface.clear_file_selection(),
        }

        debug!("error shown: {}", message);
        self.state = ErrorPresentationState {
            active: true,
            message: Some(message),
            focus_target: Some(format!("#{}", self.input_id)),
        };
    }

    /// Reverses every side effect of `show_error` and re-enables submission.
    /// Safe to call when no error is active, and calling it twice is the
    /// same as calling it once.
    pub fn reset_error(&mut self) {
        self.surface.clear_summary();
        self.surface.clear_inline_message();
        self.surface.set_group_error_state(false);
        self.surface.clear_described_by(&self.input_id);
        self.surface.clear_title_prefix();
        self.surface.set_submit_enabled(true);

        if self.state.active {
            debug!("error cleared");
        }
        self.state = ErrorPresentationState::default();
    }

    pub fn state(&self) -> &ErrorPresentationState {
        &self.state
    }

    pub fn strategy(&self) -> BlockStrategy {
        self.strategy
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageModel;

    fn presenter(strategy: BlockStrategy) -> ErrorPresenter<PageModel> {
        let page = PageModel::new("Upload your file");
        ErrorPresenter::new(page, "file-upload-component", "Error: ", strategy)
    }

    #[test]
    fn test_show_error_applies_every_facet() {
        let mut presenter = presenter(BlockStrategy::DisableSubmit);
        presenter.show_error(Message::single("The selected file is empty"));

        let page = presenter.surface();
        assert!(page.group_has_error());
        assert_eq!(page.inline_lines(), &["The selected file is empty"]);
        assert_eq!(page.summary_entries().len(), 1);
        assert!(page.summary_visible());
        assert_eq!(
            page.described_by("file-upload-component"),
            Some("file-upload-component-error")
        );
        assert_eq!(page.title(), "Error: Upload your file");
        assert_eq!(page.focused(), Some("#file-upload-component"));
        assert!(!page.submit_enabled());

        assert!(presenter.state().is_active());
        assert_eq!(presenter.state().focus_target(), Some("#file-upload-component"));
    }

    #[test]
    fn test_reset_error_reverses_every_facet() {
        let mut presenter = presenter(BlockStrategy::DisableSubmit);
        presenter.show_error(Message::single("The selected file is empty"));
        presenter.reset_error();

        let page = presenter.surface();
        assert!(!page.group_has_error());
        assert!(page.inline_lines().is_empty());
        assert!(page.summary_entries().is_empty());
        assert!(!page.summary_visible());
        assert_eq!(page.described_by("file-upload-component"), None);
        assert_eq!(page.title(), "Upload your file");
        assert!(page.submit_enabled());
        assert!(!presenter.state().is_active());
    }

    #[test]
    fn test_repeated_show_never_stacks_entries() {
        let mut presenter = presenter(BlockStrategy::DisableSubmit);
        presenter.show_error(Message::single("first"));
        presenter.show_error(Message::single("second"));
        presenter.show_error(Message::single("third"));

        let page = presenter.surface();
        assert_eq!(page.summary_entries().len(), 1);
        assert_eq!(page.summary_entries()[0].lines, vec!["third"]);
        assert_eq!(page.inline_lines(), &["third"]);
        assert_eq!(page.title(), "Error: Upload your file");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut presenter = presenter(BlockStrategy::DisableSubmit);
        presenter.reset_error();
        presenter.reset_error();
        assert!(!presenter.state().is_active());

        presenter.show_error(Message::single("oops"));
        presenter.reset_error();
        let after_once = presenter.surface().clone();
        presenter.reset_error();
        assert_eq!(presenter.surface(), &after_once);
    }

    #[test]
    fn test_multi_line_message_reaches_both_slots() {
        let mut presenter = presenter(BlockStrategy::DisableSubmit);
        presenter.show_error(Message::from_lines(["first line", "second line"]));

        let page = presenter.surface();
        assert_eq!(page.inline_lines(), &["first line", "second line"]);
        assert_eq!(
            page.summary_entries()[0].lines,
            vec!["first line", "second line"]
        );
    }

    #[test]
    fn test_clear_selection_strategy() {
        let mut presenter = presenter(BlockStrategy::ClearSelection);
        presenter.surface_mut().set_selected_value("report.pdf");
        presenter.show_error(Message::single("oops"));

        let page = presenter.surface();
        assert_eq!(page.selected_value(), None, "Selection should be cleared");
        assert!(page.submit_enabled(), "Submit stays enabled in this mode");
    }
}
