//! Contact form keyboard handler.
//!
//! Functions that transform AppState in response to form actions and
//! text input. Edits go through the submission simulator, which refuses
//! them while a message is in flight or the success banner is up.

use crate::model::{ContactField, KeyAction, SectionId, ValidationError};
use crate::state::AppState;
use crate::view_state::SubmitOutcome;
use tracing::debug;

/// Text editing input for the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    /// Append a character.
    Char(char),
    /// Delete the last character.
    Backspace,
}

/// Handle a form keyboard action.
///
/// Non-form actions are ignored.
pub fn handle_form_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::EditForm => {
            state.jump_to(SectionId::Contact);
            state.form.focus = Some(state.form.focus.unwrap_or(ContactField::Name));
        }
        KeyAction::NextField => {
            state.form.focus = state.form.focus.map(ContactField::next);
        }
        KeyAction::PrevField => {
            state.form.focus = state.form.focus.map(ContactField::prev);
        }
        KeyAction::LeaveForm => state.form.focus = None,
        KeyAction::Submit => submit(state),
        _ => {}
    }
}

fn submit(state: &mut AppState) {
    match state.contact_mut().submit() {
        Ok(SubmitOutcome::Started) => {
            state.form.error = None;
            state.form.focus = None;
        }
        Ok(outcome) => debug!(?outcome, "submit ignored"),
        Err(error) => {
            let ValidationError::EmptyField(field) = error;
            debug!(%error, "contact form rejected");
            state.form.error = Some(error);
            state.form.focus = Some(field);
        }
    }
}

/// Apply text input to the focused field.
///
/// Ignored when no field has focus or the form is locked.
pub fn handle_form_input(state: &mut AppState, input: FormInput) {
    let Some(field) = state.form.focus else {
        return;
    };
    let Some(fields) = state.contact_mut().fields_mut() else {
        return;
    };

    let value = fields.get_mut(field);
    match input {
        FormInput::Char(ch) => value.push(ch),
        FormInput::Backspace => {
            value.pop();
        }
    }

    if state.form.error == Some(ValidationError::EmptyField(field)) {
        state.form.error = None;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "form_handler_tests.rs"]
mod tests;
