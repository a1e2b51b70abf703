use log::{debug, info, warn};

use crate::config::FormConfig;
use crate::contact::fields::FormFields;
use crate::contact::requirements::RequirementController;
use crate::contact::snapshot::FormSnapshot;
use crate::contact::submission::{
    Endpoint, SubmissionOutcome, SubmissionPipeline, SubmitError, SubmitLock, Transport,
};
use crate::contact::validation::{validate, ValidationResult};
use crate::dom::{Document, Element};
use crate::notifier::{Notifier, ToastKind};
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// Validation failed; nothing was sent.
    Rejected(ValidationResult),
    Completed(SubmissionOutcome),
}

/// Owns the contact form for the lifetime of the page.
pub struct ContactForm<D: Document, S, T> {
    fields: FormFields<D::Element>,
    config: FormConfig,
    requirements: RequirementController,
    pipeline: SubmissionPipeline<T>,
    notifier: Notifier<D, S>,
}

impl<D, S, T> ContactForm<D, S, T>
where
    D: Document + 'static,
    S: Scheduler + 'static,
    T: Transport,
{
    pub fn new(
        fields: FormFields<D::Element>,
        config: FormConfig,
        transport: T,
        notifier: Notifier<D, S>,
    ) -> Self {
        let form = Self {
            requirements: RequirementController::new(&config),
            fields,
            config,
            pipeline: SubmissionPipeline::new(transport),
            notifier,
        };
        form.requirements.sync(&form.fields);
        form
    }

    pub fn fields(&self) -> &FormFields<D::Element> {
        &self.fields
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn on_service_change(&self) {
        self.requirements.sync(&self.fields);
    }

    /// Typing into a field clears its error marker.
    pub fn on_field_edited(&self, field: &D::Element) {
        if let Some(group) = field.closest(&self.config.selectors.form_group) {
            group.remove_class(&self.config.error_class);
        }
    }

    pub async fn handle_submit(&self) -> Result<SubmitReport, SubmitError> {
        if self.fields.submit.is_disabled() {
            return Err(SubmitError::InFlight);
        }

        self.clear_errors();
        let snapshot = FormSnapshot::capture(&self.fields);
        let result = validate(&snapshot);
        if !result.is_valid() {
            info!("Contact form rejected: {:?}", result.fields().collect::<Vec<_>>());
            self.flag_errors(&result);
            self.announce(&self.config.messages.invalid, ToastKind::Error);
            return Ok(SubmitReport::Rejected(result));
        }

        self.submit(&snapshot).await.map(SubmitReport::Completed)
    }

    /// Sends an already validated snapshot. The submit control stays locked
    /// until the outcome has been announced and, on success, the form reset.
    pub async fn submit(&self, snapshot: &FormSnapshot) -> Result<SubmissionOutcome, SubmitError> {
        let _lock = SubmitLock::acquire(&self.fields.submit, &self.config.busy_label)?;

        let raw = self.fields.form.attribute(&self.config.endpoint_attribute);
        let endpoint = Endpoint::resolve(raw.as_deref(), &self.config.endpoint_placeholder);
        let outcome = self.pipeline.send(snapshot, &endpoint).await;

        let messages = &self.config.messages;
        match outcome {
            SubmissionOutcome::Success => {
                self.announce(&messages.sent, ToastKind::Success);
                self.reset();
            }
            SubmissionOutcome::Unconfigured => {
                self.announce(&messages.received_locally, ToastKind::Success);
                self.reset();
            }
            SubmissionOutcome::NetworkFailure => {
                self.announce(&messages.send_failed, ToastKind::Error);
            }
        }
        Ok(outcome)
    }

    fn reset(&self) {
        debug!("Resetting contact form");
        self.fields.form.reset_form();
        self.requirements.sync(&self.fields);
    }

    fn clear_errors(&self) {
        for group in self.fields.form.find_all(&self.config.selectors.form_group) {
            group.remove_class(&self.config.error_class);
        }
    }

    fn flag_errors(&self, result: &ValidationResult) {
        let group_selector = &self.config.selectors.form_group;
        for group in result
            .fields()
            .filter_map(|id| self.fields.field(id))
            .filter_map(|el| el.closest(group_selector))
        {
            group.add_class(&self.config.error_class);
        }
        // First flagged group in page order, not field order.
        let flagged = format!("{}.{}", group_selector, self.config.error_class);
        if let Some(first) = self.fields.form.find(&flagged) {
            first.scroll_into_view();
        }
    }

    fn announce(&self, message: &str, kind: ToastKind) {
        if let Err(e) = self.notifier.notify(message, kind) {
            warn!("Could not show notification: {}", e);
        }
    }
}
