//! Pending → Approved/Rejected state machine for approval requests.
//!
//! A decision is applied in two phases: `decide` mutates the local record
//! tentatively and hands back a [`PendingDecision`]; the caller then either
//! confirms it once the back end accepts, or rolls it back.

pub mod statistics;

use std::sync::Arc;

use crate::error::CoreError;
use crate::models::{ApprovalRequest, Decision, Record, RequestStatus};
use crate::record_set::RecordSetView;
use crate::services::data_source::DecisionPayload;
use crate::services::notifier::{notify, Notifier, Severity};
use crate::types::RecordId;

pub use statistics::{derive_statistics, RequestStatistics};

pub const MAX_NOTE_CHARS: usize = 500;

/// Receipt for a tentative decision, holding what is needed to undo it.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a tentative decision must be confirmed or rolled back"]
pub struct PendingDecision<V> {
    id: RecordId,
    decision: Decision,
    note: Option<String>,
    revised_value: Option<V>,
    previous_value: V,
    previous_note: Option<String>,
}

impl<V: Clone> PendingDecision<V> {
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn revised_value(&self) -> Option<&V> {
        self.revised_value.as_ref()
    }

    /// Body to persist this decision through a data source.
    pub fn payload(&self) -> DecisionPayload<V> {
        DecisionPayload {
            decision: self.decision,
            comment: self.note.clone(),
            revised_value: self.revised_value.clone(),
        }
    }
}

pub struct RequestLifecycle {
    notifier: Arc<dyn Notifier>,
}

impl RequestLifecycle {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Moves a pending request to `decision`.
    ///
    /// A revised value replaces the requested value before the status
    /// changes. The note is an audit annotation only. Requests that are not
    /// pending are left untouched and reported as `InvalidTransition`.
    pub fn decide<R: ApprovalRequest>(
        &self,
        view: &mut RecordSetView<R>,
        id: &RecordId,
        decision: Decision,
        revised_value: Option<R::Value>,
        note: Option<&str>,
    ) -> Result<PendingDecision<R::Value>, CoreError> {
        let record = view
            .get_mut(id)
            .ok_or_else(|| CoreError::NotFound(id.clone()))?;

        let current = record.status();
        if current.is_terminal() {
            tracing::warn!(request_id = %id, status = %current, "Rejected transition on decided request");
            return Err(CoreError::InvalidTransition {
                id: id.clone(),
                status: current,
            });
        }
        let note = normalize_note(note)?;

        let receipt = PendingDecision {
            id: id.clone(),
            decision,
            note: note.clone(),
            revised_value: revised_value.clone(),
            previous_value: record.requested_value().clone(),
            previous_note: record.decision_note().map(str::to_string),
        };

        if let Some(value) = revised_value {
            record.set_requested_value(value);
        }
        record.set_status(decision.status());
        if note.is_some() {
            record.set_decision_note(note);
        }
        view.reclamp();

        tracing::info!(
            request_id = %id,
            kind = %R::KIND,
            outcome = %decision,
            revised = receipt.revised_value.is_some(),
            "Request decided"
        );
        notify(
            self.notifier.as_ref(),
            &format!("Request {} {}", id, decision),
            Severity::Success,
        );
        Ok(receipt)
    }

    /// Accepts a tentative decision after the back end has persisted it.
    pub fn confirm<V>(&self, receipt: PendingDecision<V>) -> RecordId {
        tracing::debug!(request_id = %receipt.id, outcome = %receipt.decision, "Decision confirmed");
        receipt.id
    }

    /// Restores the request to `Pending` with its previous requested value
    /// and note.
    pub fn rollback<R: ApprovalRequest>(
        &self,
        view: &mut RecordSetView<R>,
        receipt: PendingDecision<R::Value>,
    ) -> Result<(), CoreError> {
        let record = view
            .get_mut(&receipt.id)
            .ok_or_else(|| CoreError::NotFound(receipt.id.clone()))?;

        let current = record.status();
        if current != receipt.decision.status() {
            return Err(CoreError::InvalidTransition {
                id: record.id().clone(),
                status: current,
            });
        }

        record.set_requested_value(receipt.previous_value);
        record.set_decision_note(receipt.previous_note);
        record.set_status(RequestStatus::Pending);
        view.reclamp();
        tracing::warn!(request_id = %receipt.id, "Decision rolled back to pending");
        Ok(())
    }
}

fn normalize_note(note: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(trimmed) = note.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    if trimmed.chars().count() > MAX_NOTE_CHARS {
        return Err(CoreError::invalid_argument(format!(
            "note must be at most {} characters",
            MAX_NOTE_CHARS
        )));
    }
    Ok(Some(trimmed.to_string()))
}
