//! Contact form submission lifecycle.
//!
//! `Idle → Submitting → Succeeded → Idle`, with a fixed artificial latency
//! before resolution and a fixed display period for the success banner.
//! Delivery goes through a [`ContactTransport`]; the default
//! [`SimulatedTransport`] always acknowledges, so with it the lifecycle has
//! no failure path.

use super::timer::{Scheduler, TimerHandle, TimerId};
use super::types::Timestamp;
use crate::model::error::{ContactField, SubmissionError, ValidationError};
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

/// Artificial delay between submit and resolution.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1_500);

/// How long the success state is shown before returning to idle.
pub const DEFAULT_SUCCESS_DISPLAY: Duration = Duration::from_millis(3_000);

/// Most transitions kept in [`SubmissionSimulator::history`].
pub const HISTORY_LIMIT: usize = 64;

/// The three required contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    /// Sender name.
    pub name: String,
    /// Sender email. Only checked for presence.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactFields {
    /// Build a field set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check every required field is non-blank, in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in ContactField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        Ok(())
    }

    /// Value of one field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Mutable value of one field.
    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Whether every field is empty.
    pub fn is_cleared(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Acknowledgement from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    /// Transport-specific receipt.
    pub receipt: String,
}

/// Where submitted messages go.
///
/// Real deployments replace [`SimulatedTransport`] with a call to an
/// external submission endpoint.
pub trait ContactTransport {
    /// Deliver one message.
    fn deliver(&mut self, fields: &ContactFields) -> Result<Ack, SubmissionError>;
}

/// Transport that accepts everything without sending anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl ContactTransport for SimulatedTransport {
    fn deliver(&mut self, fields: &ContactFields) -> Result<Ack, SubmissionError> {
        Ok(Ack {
            receipt: format!("simulated:{}", fields.email),
        })
    }
}

/// Submission lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// Form editable, nothing in flight.
    Idle,
    /// Waiting for resolution; further submits are ignored.
    Submitting,
    /// Delivered; success banner showing.
    Succeeded,
    /// Transport rejected the message; form editable again for retry.
    Failed(SubmissionError),
}

impl SubmissionState {
    /// Whether the form accepts input and a new submit.
    pub fn accepts_input(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }
}

/// Result of a submit call that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved to `Submitting`; resolution scheduled.
    Started,
    /// A submission was already in flight; nothing changed.
    AlreadySubmitting,
    /// The success banner is still up; nothing changed.
    ShowingSuccess,
}

/// One recorded state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// When the state was entered.
    pub at: Timestamp,
    /// The state entered.
    pub state: SubmissionState,
}

/// Drives the contact form lifecycle on the shared scheduler.
///
/// The simulator owns the form fields so that clearing them coincides
/// exactly with the `Submitting → Succeeded` transition. Dropping it cancels
/// whichever transition is pending.
pub struct SubmissionSimulator {
    state: SubmissionState,
    fields: ContactFields,
    in_flight: Option<ContactFields>,
    latency: Duration,
    success_display: Duration,
    scheduler: Scheduler,
    transport: Box<dyn ContactTransport>,
    pending: Option<TimerHandle>,
    history: Vec<Transition>,
}

impl SubmissionSimulator {
    /// Create an idle simulator with the simulated transport.
    pub fn new(scheduler: &Scheduler, latency: Duration, success_display: Duration) -> Self {
        Self::with_transport(scheduler, latency, success_display, Box::new(SimulatedTransport))
    }

    /// Create an idle simulator delivering through `transport`.
    pub fn with_transport(
        scheduler: &Scheduler,
        latency: Duration,
        success_display: Duration,
        transport: Box<dyn ContactTransport>,
    ) -> Self {
        let history = vec![Transition {
            at: scheduler.now(),
            state: SubmissionState::Idle,
        }];
        Self {
            state: SubmissionState::Idle,
            fields: ContactFields::default(),
            in_flight: None,
            latency,
            success_display,
            scheduler: scheduler.clone(),
            transport,
            pending: None,
            history,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Current form values.
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Edit the form. Returns `None` while a submission is in flight or the
    /// success banner is showing.
    pub fn fields_mut(&mut self) -> Option<&mut ContactFields> {
        if self.state.accepts_input() {
            Some(&mut self.fields)
        } else {
            None
        }
    }

    /// The most recent states entered, oldest first.
    ///
    /// Holds at most [`HISTORY_LIMIT`] entries; older ones are dropped.
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    /// Whether a transition is scheduled.
    pub fn has_pending_transition(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit the current form values.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        if self.state == SubmissionState::Submitting {
            return Ok(SubmitOutcome::AlreadySubmitting);
        }
        if self.state == SubmissionState::Succeeded {
            return Ok(SubmitOutcome::ShowingSuccess);
        }

        self.fields.validate()?;
        self.in_flight = Some(self.fields.clone());
        self.enter(SubmissionState::Submitting);
        self.pending = Some(self.scheduler.schedule(self.latency));
        info!(latency_ms = self.latency.as_millis() as u64, "contact submission started");
        Ok(SubmitOutcome::Started)
    }

    /// Replace the form values and submit them.
    pub fn submit_fields(
        &mut self,
        fields: ContactFields,
    ) -> Result<SubmitOutcome, ValidationError> {
        if self.state.accepts_input() {
            self.fields = fields;
        }
        self.submit()
    }

    /// Handle a fired timer. Returns true if it advanced the lifecycle.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.pending.as_ref().is_some_and(|handle| handle.matches(id)) {
            return false;
        }
        self.pending = None;

        match self.state {
            SubmissionState::Submitting => self.resolve(),
            SubmissionState::Succeeded => self.enter(SubmissionState::Idle),
            _ => return false,
        }
        true
    }

    fn resolve(&mut self) {
        let fields = self.in_flight.take().unwrap_or_else(|| self.fields.clone());
        match self.transport.deliver(&fields) {
            Ok(ack) => {
                info!(receipt = %ack.receipt, "contact submission delivered");
                self.fields.clear();
                self.enter(SubmissionState::Succeeded);
                self.pending = Some(self.scheduler.schedule(self.success_display));
            }
            Err(error) => {
                warn!(%error, "contact submission failed");
                self.enter(SubmissionState::Failed(error));
            }
        }
    }

    fn enter(&mut self, state: SubmissionState) {
        if self.history.len() >= HISTORY_LIMIT {
            let excess = self.history.len() + 1 - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        self.history.push(Transition {
            at: self.scheduler.now(),
            state: state.clone(),
        });
        self.state = state;
    }
}

impl fmt::Debug for SubmissionSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionSimulator")
            .field("state", &self.state)
            .field("fields", &self.fields)
            .field("latency", &self.latency)
            .field("success_display", &self.success_display)
            .field("pending", &self.pending)
            .finish()
    }
}

#[cfg(test)]
#[path = "submission_tests.rs"]
mod tests;
