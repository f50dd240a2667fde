//! Table-driven status workflow engine.
//!
//! Every workflow kind declares its ordered transition chain once; the engine
//! answers "what is the single next action for this record?" and applies it.
//! All chains are linear: one forward step at a time, no rollback.

use std::fmt;

use tracing::instrument;

use crate::errors::ServiceError;

/// A permitted move between two statuses, labelled with the action the
/// dashboard shows on its workflow button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<S: 'static> {
    pub from: S,
    pub to: S,
    pub action: &'static str,
}

/// Implemented by every status enumeration that participates in a workflow.
///
/// The transition list is the sole per-kind configuration artifact; everything
/// else (button rendering, gating, application) is generic.
pub trait WorkflowStatus: Copy + Eq + fmt::Display + Send + Sync + 'static {
    fn initial() -> Self;

    /// Ordered list of legal transitions for this kind.
    fn transitions() -> &'static [Transition<Self>];

    /// Terminal statuses have no outgoing transition.
    fn is_terminal(self) -> bool {
        Self::transitions().iter().all(|t| t.from != self)
    }
}

/// Status as displayed: either the stored value or the derived
/// "No Assignment" pseudo-status for staff records without an assignee.
/// The pseudo-status is computed at view time and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveStatus<S> {
    NoAssignment,
    Current(S),
}

impl<S: fmt::Display> fmt::Display for EffectiveStatus<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveStatus::NoAssignment => write!(f, "No Assignment"),
            EffectiveStatus::Current(status) => status.fmt(f),
        }
    }
}

pub fn effective_status<S: WorkflowStatus>(status: S, assigned: bool) -> EffectiveStatus<S> {
    if assigned {
        EffectiveStatus::Current(status)
    } else {
        EffectiveStatus::NoAssignment
    }
}

/// The at-most-one actionable transition for the current effective status.
///
/// Returns `None` at a terminal status or when the gating flag is false
/// (an unassigned record offers no action).
pub fn next_transition<S: WorkflowStatus>(
    current: S,
    assigned: bool,
) -> Option<&'static Transition<S>> {
    if !assigned {
        return None;
    }
    S::transitions().iter().find(|t| t.from == current)
}

/// Apply the single legal transition out of `current`.
///
/// Unlike the lenient UI this was modelled on, an ungated or dead-end attempt
/// is a reported error, never a silent no-op.
#[instrument(level = "debug", skip_all, fields(from = %current))]
pub fn advance<S: WorkflowStatus>(
    current: S,
    assigned: bool,
) -> Result<&'static Transition<S>, ServiceError> {
    if !assigned {
        return Err(ServiceError::NotActionable(
            "no assignee set".to_string(),
        ));
    }
    next_transition(current, true).ok_or_else(|| ServiceError::InvalidTransition {
        status: current.to_string(),
    })
}

/// Serializable view of the single next workflow action, as rendered on the
/// dashboard's action button.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NextAction {
    pub action: &'static str,
    pub from: String,
    pub to: String,
}

impl NextAction {
    pub fn of<S: WorkflowStatus>(transition: &Transition<S>) -> Self {
        Self {
            action: transition.action,
            from: transition.from.to_string(),
            to: transition.to.to_string(),
        }
    }
}

/// Walk the chain from the initial status, collecting every status in order.
/// Used by tests and by the `/actions` endpoints to describe a kind's chain.
pub fn chain_statuses<S: WorkflowStatus>() -> Vec<S> {
    let mut statuses = vec![S::initial()];
    let mut current = S::initial();
    while let Some(t) = S::transitions().iter().find(|t| t.from == current) {
        statuses.push(t.to);
        current = t.to;
    }
    statuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdjustmentStatus;

    #[test]
    fn offers_exactly_one_action_per_status() {
        let t = next_transition(AdjustmentStatus::Open, true).unwrap();
        assert_eq!(t.to, AdjustmentStatus::Pending);
        assert_eq!(t.action, "Post");
    }

    #[test]
    fn terminal_status_offers_nothing() {
        assert!(AdjustmentStatus::Done.is_terminal());
        assert!(next_transition(AdjustmentStatus::Done, true).is_none());
    }

    #[test]
    fn ungated_advance_is_an_error() {
        let err = advance(AdjustmentStatus::Open, false).unwrap_err();
        assert!(matches!(err, ServiceError::NotActionable(_)));
    }

    #[test]
    fn advance_from_terminal_is_an_error() {
        let err = advance(AdjustmentStatus::Done, true).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTransition { .. }));
    }

    #[test]
    fn pseudo_status_displays_as_no_assignment() {
        let eff = effective_status(AdjustmentStatus::Open, false);
        assert_eq!(eff.to_string(), "No Assignment");
    }
}
