//! Submit workflow for the order form.
//!
//! The workflow owns no DOM. Each call returns the [`Effect`]s the caller
//! must apply, in order:
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!                    -> Submitting --(delay)--> Succeeded -> Idle
//! ```
//!
//! A scheduled completion is identified by a [`SubmissionTicket`]. Starting
//! a new submit while one is pending emits [`Effect::CancelPending`] for the
//! old ticket, and a completion arriving with any ticket but the pending one
//! is ignored.

use crate::config::SUBMIT_DELAY_MS;
use crate::locale::Messages;
use crate::order::OrderSubmission;
use crate::validation::validate_order;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    Invalid,
    Submitting { ticket: SubmissionTicket },
    Succeeded,
}

/// Something the controller has to do to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Drop the timer belonging to this ticket.
    CancelPending(SubmissionTicket),
    /// Show the aggregated error overlay.
    ShowErrors(Vec<String>),
    /// Disable the submit button and show `label`.
    LockSubmit { label: String },
    /// Call [`SubmissionWorkflow::complete`] with `ticket` after `delay_ms`.
    ScheduleCompletion { ticket: SubmissionTicket, delay_ms: u32 },
    ShowSuccess,
    ClearFields,
    /// Re-enable the submit button and restore `label`.
    UnlockSubmit { label: String },
}

#[derive(Debug, Clone)]
pub struct SubmissionWorkflow {
    state: SubmitState,
    next_ticket: u64,
    delay_ms: u32,
    messages: Messages,
}

impl SubmissionWorkflow {
    pub fn new(messages: Messages) -> Self {
        Self::with_delay(messages, SUBMIT_DELAY_MS)
    }

    pub fn with_delay(messages: Messages, delay_ms: u32) -> Self {
        Self {
            state: SubmitState::Idle,
            next_ticket: 0,
            delay_ms,
            messages,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn pending(&self) -> Option<SubmissionTicket> {
        match self.state {
            SubmitState::Submitting { ticket } => Some(ticket),
            _ => None,
        }
    }

    fn transition(&mut self, next: SubmitState) {
        debug!("submit workflow: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Handle a submit attempt with the form's current values.
    pub fn submit(&mut self, snapshot: &OrderSubmission) -> Vec<Effect> {
        let mut effects = Vec::new();

        let cancelled = self.pending();
        if let Some(ticket) = cancelled {
            info!("Submit while {:?} pending, cancelling it", ticket);
            effects.push(Effect::CancelPending(ticket));
        }

        self.transition(SubmitState::Validating);
        let report = validate_order(snapshot, &self.messages);

        if !report.valid {
            self.transition(SubmitState::Invalid);
            info!("Order rejected with {} invalid field(s)", report.errors.len());
            effects.push(Effect::ShowErrors(report.messages()));
            // a cancelled submission leaves the button locked
            if cancelled.is_some() {
                effects.push(Effect::UnlockSubmit {
                    label: self.messages.submit_label.clone(),
                });
            }
            self.transition(SubmitState::Idle);
            return effects;
        }

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.transition(SubmitState::Submitting { ticket });
        effects.push(Effect::LockSubmit {
            label: self.messages.busy_label.clone(),
        });
        effects.push(Effect::ScheduleCompletion {
            ticket,
            delay_ms: self.delay_ms,
        });
        effects
    }

    /// Handle the delayed completion for `ticket`.
    pub fn complete(&mut self, ticket: SubmissionTicket) -> Vec<Effect> {
        if self.pending() != Some(ticket) {
            debug!("Ignoring stale completion {:?}", ticket);
            return Vec::new();
        }

        self.transition(SubmitState::Succeeded);
        info!("Order submitted");
        let effects = vec![
            Effect::ShowSuccess,
            Effect::ClearFields,
            Effect::UnlockSubmit {
                label: self.messages.submit_label.clone(),
            },
        ];
        self.transition(SubmitState::Idle);
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_order() -> OrderSubmission {
        OrderSubmission {
            name: "Jo".into(),
            phone: "+1 234 567 8901".into(),
            email: "a@b.co".into(),
            model: "X1".into(),
            address: "123 Main Street".into(),
            consent: true,
        }
    }

    fn scheduled_ticket(effects: &[Effect]) -> SubmissionTicket {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::ScheduleCompletion { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .expect("completion scheduled")
    }

    #[test]
    fn invalid_submit_returns_to_idle_without_clearing() {
        let mut wf = SubmissionWorkflow::new(Messages::default());
        let effects = wf.submit(&OrderSubmission::default());

        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::ShowErrors(errors) => assert_eq!(errors.len(), 6),
            other => panic!("unexpected effect {:?}", other),
        }
        assert_eq!(wf.state(), SubmitState::Idle);
        assert!(!effects.contains(&Effect::ClearFields));
    }

    #[test]
    fn valid_submit_locks_and_schedules() {
        let m = Messages::default();
        let mut wf = SubmissionWorkflow::new(m.clone());
        let effects = wf.submit(&valid_order());

        let ticket = scheduled_ticket(&effects);
        assert_eq!(
            effects,
            vec![
                Effect::LockSubmit { label: m.busy_label.clone() },
                Effect::ScheduleCompletion { ticket, delay_ms: SUBMIT_DELAY_MS },
            ]
        );
        assert_eq!(wf.state(), SubmitState::Submitting { ticket });
        assert_eq!(wf.pending(), Some(ticket));
    }

    #[test]
    fn completion_succeeds_then_idles() {
        let m = Messages::default();
        let mut wf = SubmissionWorkflow::with_delay(m.clone(), 10);
        let ticket = scheduled_ticket(&wf.submit(&valid_order()));

        let effects = wf.complete(ticket);
        assert_eq!(
            effects,
            vec![
                Effect::ShowSuccess,
                Effect::ClearFields,
                Effect::UnlockSubmit { label: m.submit_label.clone() },
            ]
        );
        assert_eq!(wf.state(), SubmitState::Idle);
        assert_eq!(wf.pending(), None);

        // firing twice does nothing
        assert!(wf.complete(ticket).is_empty());
    }

    #[test]
    fn resubmit_cancels_pending_completion() {
        let mut wf = SubmissionWorkflow::new(Messages::default());
        let first = scheduled_ticket(&wf.submit(&valid_order()));

        let effects = wf.submit(&valid_order());
        assert_eq!(effects[0], Effect::CancelPending(first));
        let second = scheduled_ticket(&effects);
        assert_ne!(first, second);

        assert!(wf.complete(first).is_empty());
        assert_eq!(wf.pending(), Some(second));
        assert_eq!(wf.complete(second).len(), 3);
    }

    #[test]
    fn invalid_resubmit_cancels_and_unlocks() {
        let m = Messages::default();
        let mut wf = SubmissionWorkflow::new(m.clone());
        let first = scheduled_ticket(&wf.submit(&valid_order()));

        let effects = wf.submit(&OrderSubmission::default());
        assert_eq!(effects[0], Effect::CancelPending(first));
        assert!(matches!(effects[1], Effect::ShowErrors(_)));
        assert_eq!(effects[2], Effect::UnlockSubmit { label: m.submit_label.clone() });
        assert_eq!(wf.state(), SubmitState::Idle);
        assert!(wf.complete(first).is_empty());
    }
}
