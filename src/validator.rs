//! The form-level state machine.
//!
//! Wires the two browser events to the rule engine and the presenter. The
//! change event validates eagerly so the user gets feedback before pressing
//! submit; the submit event always re-validates the current selection as the
//! authoritative gate, so a stale or cleared selection can never slip
//! through on the strength of an earlier pass. A lock flips after the first
//! allowed submit and suppresses any further attempts without re-running
//! validation.

use log::{debug, warn};

use crate::context::ValidationContext;
use crate::file::SelectedFile;
use crate::messages::MessageCatalog;
use crate::render::{BlockStrategy, ErrorPresenter, ErrorSurface};
use crate::rules::{self, Outcome};

/// What the caller must do with the submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the native submission proceed.
    Proceed,
    /// Cancel the event; an error is on screen and the form stays put.
    Blocked,
    /// A submission already went through; cancel without re-validating.
    Suppressed,
}

/// Where the current submit attempt stands. `Blocked` lasts until the next
/// event; `Submitting` is terminal for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Blocked,
    Submitting,
}

/// Validates one file-input control against one form. Owns the shared
/// mutable state the event handlers touch: the presenter and the submit
/// lock.
pub struct FormFileValidator<S: ErrorSurface> {
    context: ValidationContext,
    catalog: MessageCatalog,
    presenter: ErrorPresenter<S>,
    allow_submit: bool,
    phase: SubmitPhase,
}

impl<S: ErrorSurface> FormFileValidator<S> {
    /// Builds the validator with the default block strategy
    /// ([`BlockStrategy::DisableSubmit`]).
    pub fn new(context: ValidationContext, catalog: MessageCatalog, surface: S) -> Self {
        Self::with_strategy(context, catalog, surface, BlockStrategy::default())
    }

    /// Builds the validator with an explicit block strategy.
    pub fn with_strategy(
        context: ValidationContext,
        catalog: MessageCatalog,
        surface: S,
        strategy: BlockStrategy,
    ) -> Self {
        let presenter = ErrorPresenter::new(
            surface,
            context.input_id(),
            catalog.error_prefix(),
            strategy,
        );
        Self {
            context,
            catalog,
            presenter,
            allow_submit: true,
            phase: SubmitPhase::Idle,
        }
    }

    /// Handles the file-input change event. Any visible error is cleared
    /// first; a newly selected file is validated eagerly and its first
    /// failing rule shown immediately. A change that leaves the input empty
    /// (picker cancelled) only clears the error: the presence rule is the
    /// submit gate's to raise.
    pub fn handle_change(&mut self, file: Option<&SelectedFile>) {
        self.phase = SubmitPhase::Idle;
        self.presenter.reset_error();

        let Some(file) = file else {
            debug!("selection cleared");
            return;
        };

        if let Outcome::Invalid { message, .. } =
            rules::evaluate(Some(file), &self.context, &self.catalog)
        {
            self.presenter.show_error(message);
        }
    }

    /// Handles the form submit event. The lock check comes first: once a
    /// submission has gone through, further attempts are suppressed without
    /// re-validation. Otherwise the current selection is re-validated from
    /// scratch and the event is either blocked or allowed through, flipping
    /// the lock.
    pub fn handle_submit(&mut self, file: Option<&SelectedFile>) -> SubmitDecision {
        if !self.allow_submit {
            warn!("submit suppressed: a submission is already under way");
            return SubmitDecision::Suppressed;
        }

        self.phase = SubmitPhase::Validating;

        match rules::evaluate(file, &self.context, &self.catalog) {
            Outcome::Valid => {
                self.presenter.reset_error();
                self.allow_submit = false;
                self.phase = SubmitPhase::Submitting;
                debug!("submit allowed");
                SubmitDecision::Proceed
            }
            Outcome::Invalid { kind, message } => {
                warn!("submit blocked: {}", kind);
                self.presenter.show_error(message);
                self.phase = SubmitPhase::Blocked;
                SubmitDecision::Blocked
            }
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    pub fn presenter(&self) -> &ErrorPresenter<S> {
        &self.presenter
    }

    /// Returns the underlying surface, for hosts that need to read it back.
    pub fn surface(&self) -> &S {
        self.presenter.surface()
    }
}
