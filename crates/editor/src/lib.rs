//! Schedule editor core — draft state, declarative per-field validation,
//! and the create/update submission state machine.
//!
//! The editor holds exactly one draft, validates it against the field rules,
//! and submits it through the [`service::ScheduleService`] collaborator.
//! Whether a submission creates or updates is fixed when the editor is
//! built, by whether an existing record was supplied.
//!
//! Split into submodules:
//! - [`draft`] — mutable candidate values and day-set handling
//! - [`validation`] — pure per-field rules and the field→message report
//! - [`service`] — collaborator contracts (schedule service, notifier)
//! - [`editor`] — the [`editor::ScheduleEditor`] state machine and builder

pub mod draft;
pub mod editor;
pub mod service;
pub mod validation;

pub use draft::ScheduleDraft;
pub use editor::{Mode, ScheduleEditor, ScheduleEditorBuilder, SubmitOutcome};
pub use service::{Notifier, ScheduleService};
pub use validation::{validate, Field, ValidationReport};
