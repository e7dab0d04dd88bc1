//! Per-card approve/reject form state machine.
//!
//! Each card under review holds one of three decisions: untouched,
//! approved, or rejected with a reason draft. Transitions are explicit
//! actions; the ones that persist produce a [`StatusUpdate`] for the
//! caller to flush through the store. Rejection only commits once a
//! non-empty reason is saved.

use common::ServiceItemStatus;
use serde::{Deserialize, Serialize};

/// The decision currently held by a card's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardDecision {
    /// No decision yet (covers both "never reviewed" and REQUESTED).
    Unset,
    Approved,
    /// Reject selected. `reason` is a draft until saved; `saved` marks
    /// whether the rejection has been committed.
    Rejected { reason: String, saved: bool },
}

/// User actions on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Approve,
    Reject,
    EditReason(String),
    SaveRejection,
    ClearSelection,
}

/// The patch payload flushed to the backend on commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: ServiceItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl StatusUpdate {
    pub fn approved() -> Self {
        Self {
            status: ServiceItemStatus::Approved,
            rejection_reason: None,
        }
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            status: ServiceItemStatus::Denied,
            rejection_reason: Some(reason.into()),
        }
    }

    pub fn cleared() -> Self {
        Self {
            status: ServiceItemStatus::Requested,
            rejection_reason: None,
        }
    }
}

/// Form state for one card, seeded from the item's persisted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    decision: CardDecision,
}

impl CardForm {
    pub fn seeded(status: Option<ServiceItemStatus>, rejection_reason: Option<&str>) -> Self {
        let decision = match status {
            Some(ServiceItemStatus::Approved) => CardDecision::Approved,
            Some(ServiceItemStatus::Denied) => CardDecision::Rejected {
                reason: rejection_reason.unwrap_or_default().to_string(),
                saved: true,
            },
            Some(ServiceItemStatus::Requested) | None => CardDecision::Unset,
        };
        Self { decision }
    }

    pub fn decision(&self) -> &CardDecision {
        &self.decision
    }

    /// Whether the rejection Save action is currently enabled: reject must
    /// be selected and the reason draft non-empty.
    pub fn can_save_rejection(&self) -> bool {
        matches!(&self.decision, CardDecision::Rejected { reason, .. } if !reason.trim().is_empty())
    }

    /// The committed status this form represents, for aggregate totals.
    /// An unsaved rejection draft does not count as rejected yet.
    pub fn effective_status(&self) -> Option<ServiceItemStatus> {
        match &self.decision {
            CardDecision::Unset => None,
            CardDecision::Approved => Some(ServiceItemStatus::Approved),
            CardDecision::Rejected { saved: true, .. } => Some(ServiceItemStatus::Denied),
            CardDecision::Rejected { saved: false, .. } => None,
        }
    }

    /// Apply a user action. Returns the update to persist when the action
    /// commits; `None` when the action only edits local state.
    pub fn apply(&mut self, action: CardAction) -> Option<StatusUpdate> {
        match action {
            // Approve commits immediately and discards any reason draft.
            CardAction::Approve => {
                self.decision = CardDecision::Approved;
                Some(StatusUpdate::approved())
            }
            // Reject only reveals the reason form; nothing commits yet.
            CardAction::Reject => {
                if !matches!(self.decision, CardDecision::Rejected { .. }) {
                    self.decision = CardDecision::Rejected {
                        reason: String::new(),
                        saved: false,
                    };
                }
                None
            }
            CardAction::EditReason(text) => {
                if let CardDecision::Rejected { reason, saved } = &mut self.decision {
                    *reason = text;
                    *saved = false;
                }
                None
            }
            CardAction::SaveRejection => {
                if !self.can_save_rejection() {
                    return None;
                }
                if let CardDecision::Rejected { reason, saved } = &mut self.decision {
                    *saved = true;
                    return Some(StatusUpdate::denied(reason.clone()));
                }
                None
            }
            // Clearing resets the form and commits the cleared state.
            CardAction::ClearSelection => {
                self.decision = CardDecision::Unset;
                Some(StatusUpdate::cleared())
            }
        }
    }
}
