//! `ScheduleEditor` — one draft, its validation report, and the
//! create/update submission state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use sr_domain::schedule::{ScheduleRecord, Weekday};

use crate::draft::ScheduleDraft;
use crate::service::{Notifier, ScheduleService};
use crate::validation::{validate, Field, ValidationReport};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Mode & outcome
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Create vs edit, fixed for the lifetime of one editor instance by
/// whether an existing record was supplied at build time. Never re-derived
/// from the draft's contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit { id: Uuid },
}

impl Mode {
    pub fn is_edit(self) -> bool {
        matches!(self, Mode::Edit { .. })
    }
}

/// What one [`ScheduleEditor::submit`] attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; no collaborator was contacted.
    Invalid,
    /// A submission was already in flight; nothing was sent.
    InFlight,
    /// The service acknowledged; the mode-appropriate success callback fired.
    Saved,
    /// The service call failed; the message went to the notifier and the
    /// draft is retained for retry.
    Failed,
}

type RecordCallback = Box<dyn FnMut(ScheduleRecord) + Send>;
type CancelCallback = Box<dyn FnMut() + Send>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Builder
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Builder for [`ScheduleEditor`]. Callbacks default to no-ops; supplying
/// an existing record switches the editor into edit mode and seeds the
/// draft from it.
pub struct ScheduleEditorBuilder {
    service: Arc<dyn ScheduleService>,
    notifier: Arc<dyn Notifier>,
    existing: Option<ScheduleRecord>,
    on_created: RecordCallback,
    on_updated: RecordCallback,
    on_cancel: CancelCallback,
}

impl ScheduleEditorBuilder {
    /// Edit the given record instead of creating a new schedule.
    pub fn existing(mut self, record: &ScheduleRecord) -> Self {
        self.existing = Some(record.clone());
        self
    }

    /// Called with the resulting record after a successful create.
    pub fn on_created(mut self, f: impl FnMut(ScheduleRecord) + Send + 'static) -> Self {
        self.on_created = Box::new(f);
        self
    }

    /// Called with the resulting record after a successful update.
    pub fn on_updated(mut self, f: impl FnMut(ScheduleRecord) + Send + 'static) -> Self {
        self.on_updated = Box::new(f);
        self
    }

    /// Called when the user abandons the editor.
    pub fn on_cancel(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_cancel = Box::new(f);
        self
    }

    pub fn build(self) -> ScheduleEditor {
        let (mode, draft) = match &self.existing {
            Some(record) => (Mode::Edit { id: record.id }, ScheduleDraft::from_record(record)),
            None => (Mode::Create, ScheduleDraft::empty()),
        };

        ScheduleEditor {
            mode,
            service: self.service,
            notifier: self.notifier,
            draft: Mutex::new(draft),
            // Rules run on interaction and before submit, not at mount:
            // an untouched create form shows no errors yet.
            errors: Mutex::new(ValidationReport::default()),
            submitting: AtomicBool::new(false),
            on_created: Mutex::new(self.on_created),
            on_updated: Mutex::new(self.on_updated),
            on_cancel: Mutex::new(self.on_cancel),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Editor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Holds one draft and submits it as a create or an update.
///
/// All methods take `&self`; a UI layer holds the editor in an `Arc` and
/// drives it from its event loop. The draft is exclusively owned here and
/// re-validated on every mutating interaction.
pub struct ScheduleEditor {
    mode: Mode,
    service: Arc<dyn ScheduleService>,
    notifier: Arc<dyn Notifier>,
    draft: Mutex<ScheduleDraft>,
    errors: Mutex<ValidationReport>,
    submitting: AtomicBool,
    on_created: Mutex<RecordCallback>,
    on_updated: Mutex<RecordCallback>,
    on_cancel: Mutex<CancelCallback>,
}

impl ScheduleEditor {
    pub fn builder(
        service: Arc<dyn ScheduleService>,
        notifier: Arc<dyn Notifier>,
    ) -> ScheduleEditorBuilder {
        ScheduleEditorBuilder {
            service,
            notifier,
            existing: None,
            on_created: Box::new(|_| {}),
            on_updated: Box::new(|_| {}),
            on_cancel: Box::new(|| {}),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True while a submission is in flight. The UI disables the submit
    /// control on this.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Busy indicator text for the submit control.
    pub fn busy_label(&self) -> &'static str {
        if self.mode.is_edit() {
            "Updating…"
        } else {
            "Creating…"
        }
    }

    // ── draft interaction ────────────────────────────────────────────

    pub fn set_topic(&self, topic: impl Into<String>) {
        self.draft.lock().topic = topic.into();
        self.revalidate();
    }

    pub fn set_time(&self, time: impl Into<String>) {
        self.draft.lock().time = time.into();
        self.revalidate();
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.draft.lock().description = description.into();
        self.revalidate();
    }

    /// Flip one day's membership; returns the new membership.
    pub fn toggle_day(&self, day: Weekday) -> bool {
        let selected = self.draft.lock().toggle_day(day);
        self.revalidate();
        selected
    }

    /// Force one day's membership (checkbox semantics).
    pub fn set_day(&self, day: Weekday, selected: bool) {
        self.draft.lock().set_day(day, selected);
        self.revalidate();
    }

    /// Read-only count of selected days, always equal to the day set's
    /// cardinality.
    pub fn selected_day_count(&self) -> usize {
        self.draft.lock().selected_day_count()
    }

    /// Snapshot of the current draft values.
    pub fn draft(&self) -> ScheduleDraft {
        self.draft.lock().clone()
    }

    /// Snapshot of the current validation report.
    pub fn errors(&self) -> ValidationReport {
        self.errors.lock().clone()
    }

    /// The message attached to one field, if any.
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.errors.lock().error(field).map(str::to_owned)
    }

    /// Re-run the rules against the current draft and store the report.
    /// Returns true when the draft is submittable.
    fn revalidate(&self) -> bool {
        let report = {
            let draft = self.draft.lock();
            validate(&draft)
        };
        let clean = report.is_clean();
        *self.errors.lock() = report;
        clean
    }

    // ── submission ───────────────────────────────────────────────────

    /// Run one submit attempt: validate, then dispatch a create or an
    /// update according to the editor's mode.
    ///
    /// While a call is in flight, further `submit` calls return
    /// [`SubmitOutcome::InFlight`] without contacting the service — the
    /// latch disables rather than queues. On failure the draft is kept
    /// as entered and the normalized message goes to the notifier.
    ///
    /// The editor never cancels an in-flight call; a caller that tears
    /// down its UI mid-flight must be prepared for a late callback.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::InFlight;
        }
        if !self.revalidate() {
            return SubmitOutcome::Invalid;
        }
        if self.submitting.swap(true, Ordering::SeqCst) {
            return SubmitOutcome::InFlight;
        }

        let fields = self.draft.lock().fields();
        let result = match self.mode {
            Mode::Create => self.service.create(fields).await,
            Mode::Edit { id } => self.service.update(id, fields).await,
        };

        let outcome = match result {
            Ok(record) => {
                match self.mode {
                    Mode::Create => {
                        tracing::info!(schedule_id = %record.id, "schedule created");
                        let mut cb = self.on_created.lock();
                        (cb.as_mut())(record);
                    }
                    Mode::Edit { .. } => {
                        tracing::info!(schedule_id = %record.id, "schedule updated");
                        let mut cb = self.on_updated.lock();
                        (cb.as_mut())(record);
                    }
                }
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::warn!(error = %e, mode = ?self.mode, "schedule submission failed");
                self.notifier
                    .notify(&format!("Could not save schedule: {}", e));
                SubmitOutcome::Failed
            }
        };

        self.submitting.store(false, Ordering::SeqCst);
        outcome
    }

    /// Abandon editing: fires `on_cancel` and nothing else. Available in
    /// any state and never submits.
    pub fn cancel(&self) {
        let mut cb = self.on_cancel.lock();
        (cb.as_mut())();
    }
}
