//! Validation and accessible error presentation for a single-file upload
//! form.
//!
//! The crate models the client side of an upload page: a
//! [`ValidationContext`] built once from the page's markup attributes, a
//! rule engine that checks the selected file's name, size and extension in a
//! fixed priority order, and a presenter that shows the first failing rule
//! as accessible feedback (inline message, error summary with focus
//! management, aria-describedby link, document title prefix) while gating
//! form submission. Only file metadata is inspected; no content is read and
//! nothing is uploaded.
//!
//! The page itself sits behind the [`ErrorSurface`] trait, so the whole
//! machine runs against a real DOM binding or against the bundled in-memory
//! [`PageModel`].
//!
//! ```
//! use upload_validation::{
//!     FormFileValidator, MessageCatalog, PageModel, SelectedFile, SubmitDecision,
//!     ValidationContext,
//! };
//!
//! let context = ValidationContext::from_markup(
//!     "2000000",               // data-max-file-size
//!     ".pdf,.docx",            // file-extensions
//!     "file-upload-component", // id of the file input
//! )?;
//! let mut validator = FormFileValidator::new(
//!     context,
//!     MessageCatalog::default(),
//!     PageModel::new("Upload your file"),
//! );
//!
//! let file = SelectedFile::new("report.pdf", 1000);
//! validator.handle_change(Some(&file));
//! assert_eq!(validator.handle_submit(Some(&file)), SubmitDecision::Proceed);
//! # Ok::<(), upload_validation::ContextError>(())
//! ```

mod context;
mod file;
mod messages;
mod page;
mod render;
mod rules;
mod validator;

pub use context::{ContextError, ValidationContext};
pub use file::SelectedFile;
pub use messages::{Message, MessageCatalog};
pub use page::{PageModel, SummaryEntry};
pub use render::{BlockStrategy, ErrorPresentationState, ErrorPresenter, ErrorSurface};
pub use rules::{evaluate, ErrorKind, Outcome};
pub use validator::{FormFileValidator, SubmitDecision, SubmitPhase};
