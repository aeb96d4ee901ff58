//! The rule engine.
//!
//! Five checks run in a fixed, short-circuiting priority order: presence,
//! name format, non-empty content, size ceiling, extension whitelist. The
//! first failing rule determines the reported error; later rules never run,
//! so exactly one error kind is produced per evaluation. The cheapest and
//! most certain failures come first, before any size or extension work.

use derive_more::Display;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::context::ValidationContext;
use crate::file::SelectedFile;
use crate::messages::{Message, MessageCatalog};

// First character alphanumeric, then one or more of alphanumeric, dot,
// hyphen, underscore or space, so a valid name is at least two characters.
static FILENAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-zA-Z][0-9a-zA-Z.\-_ ]+$").expect("Failed to compile filename regex")
});

/// Every way a selected file can fail validation. All of these are
/// user-input failures requiring a different file, never system faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, EnumIter)]
pub enum ErrorKind {
    NotSelected,
    InvalidName,
    EmptyFile,
    TooLarge,
    BadExtension,
}

/// The result of one evaluation, computed fresh on every change and submit
/// event. An invalid outcome carries its already-rendered message.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Valid,
    Invalid { kind: ErrorKind, message: Message },
}

impl Outcome {
    /// Returns the error kind when the outcome is invalid.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid { kind, .. } => Some(*kind),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }
}

/// Evaluates the current selection against the page's constraints. The
/// presence guard runs first so the name and size of an absent file are
/// never read.
pub fn evaluate(
    file: Option<&SelectedFile>,
    context: &ValidationContext,
    catalog: &MessageCatalog,
) -> Outcome {
    let outcome = match check(file, context) {
        Some(kind) => Outcome::Invalid {
            kind,
            message: catalog.render(kind, context),
        },
        None => Outcome::Valid,
    };

    match &outcome {
        Outcome::Valid => debug!("validation passed for {:?}", file.map(SelectedFile::name)),
        Outcome::Invalid { kind, .. } => {
            debug!("validation failed for {:?}: {}", file.map(SelectedFile::name), kind)
        }
    }

    outcome
}

fn check(file: Option<&SelectedFile>, context: &ValidationContext) -> Option<ErrorKind> {
    let Some(file) = file else {
        return Some(ErrorKind::NotSelected);
    };

    if !FILENAME_REGEX.is_match(file.name()) {
        return Some(ErrorKind::InvalidName);
    }

    if file.size() == 0 {
        return Some(ErrorKind::EmptyFile);
    }

    if file.size() > context.max_file_size() {
        return Some(ErrorKind::TooLarge);
    }

    match file.extension() {
        Some(extension) if context.allows_extension(&extension) => None,
        _ => Some(ErrorKind::BadExtension),
    }
}
