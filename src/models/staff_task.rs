//! Staff work assignments against sales orders and transfers.
//!
//! All five task kinds (picker, barcoder, tagger, checker, transfer crew)
//! share one record shape and differ only in their status chain. A task with
//! no assignee displays the derived "No Assignment" pseudo-status and offers
//! no workflow action until someone is assigned.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditInfo, EntityKind, Record};
use crate::workflow::{EffectiveStatus, Transition, WorkflowStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffTask<S> {
    pub id: Uuid,
    pub reference: String,
    pub order_reference: String,
    pub warehouse: String,
    pub assignee: Option<String>,
    pub quantity_expected: i64,
    pub quantity_done: i64,
    pub status: S,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl<S: WorkflowStatus> StaffTask<S> {
    pub fn is_assigned(&self) -> bool {
        self.assignee
            .as_deref()
            .map_or(false, |a| !a.trim().is_empty())
    }

    /// Status as displayed: "No Assignment" until an assignee is set.
    pub fn effective_status(&self) -> EffectiveStatus<S> {
        crate::workflow::effective_status(self.status, self.is_assigned())
    }
}

pub type PickerTask = StaffTask<PickerStatus>;
pub type BarcoderTask = StaffTask<BarcoderStatus>;
pub type TaggerTask = StaffTask<TaggerStatus>;
pub type CheckerTask = StaffTask<CheckerStatus>;
pub type TransferTask = StaffTask<TransferTaskStatus>;

macro_rules! task_status {
    ($name:ident, $kind:ident, $alias:ty,
     $s0:ident => ($a0:literal) $s1:ident => ($a1:literal) $s2:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Serialize,
            Deserialize,
            strum::Display,
            strum::EnumString,
        )]
        pub enum $name {
            $s0,
            $s1,
            $s2,
        }

        impl WorkflowStatus for $name {
            fn initial() -> Self {
                $name::$s0
            }

            fn transitions() -> &'static [Transition<Self>] {
                static TRANSITIONS: [Transition<$name>; 2] = [
                    Transition {
                        from: $name::$s0,
                        to: $name::$s1,
                        action: $a0,
                    },
                    Transition {
                        from: $name::$s1,
                        to: $name::$s2,
                        action: $a1,
                    },
                ];
                &TRANSITIONS
            }
        }

        impl Record for $alias {
            const KIND: EntityKind = EntityKind::$kind;

            fn id(&self) -> Uuid {
                self.id
            }
        }
    };
}

task_status!(PickerStatus, PickerTask, PickerTask,
    Pending => ("Start Picking") Picking => ("Complete Picking") Picked);
task_status!(BarcoderStatus, BarcoderTask, BarcoderTask,
    Pending => ("Start Scanning") Scanning => ("Complete Scanning") Scanned);
task_status!(TaggerStatus, TaggerTask, TaggerTask,
    Pending => ("Start Tagging") Tagging => ("Complete Tagging") Tagged);
task_status!(CheckerStatus, CheckerTask, CheckerTask,
    Pending => ("Start Checking") Checking => ("Complete Checking") Checked);
task_status!(TransferTaskStatus, TransferTask, TransferTask,
    Pending => ("Start Loading") Loading => ("Complete Loading") Loaded);

#[cfg(test)]
mod tests {
    use super::*;

    fn task(assignee: Option<&str>) -> PickerTask {
        StaffTask {
            id: Uuid::new_v4(),
            reference: "PCK-001".into(),
            order_reference: "ORD-001".into(),
            warehouse: "Main".into(),
            assignee: assignee.map(str::to_string),
            quantity_expected: 5,
            quantity_done: 0,
            status: PickerStatus::Pending,
            audit: AuditInfo::created("system"),
        }
    }

    #[test]
    fn blank_assignee_counts_as_unassigned() {
        assert!(!task(None).is_assigned());
        assert!(!task(Some("   ")).is_assigned());
        assert!(task(Some("jdoe")).is_assigned());
    }

    #[test]
    fn unassigned_task_shows_pseudo_status() {
        assert_eq!(task(None).effective_status().to_string(), "No Assignment");
        assert_eq!(task(Some("jdoe")).effective_status().to_string(), "Pending");
    }

    #[test]
    fn each_task_chain_is_three_statuses() {
        assert_eq!(crate::workflow::chain_statuses::<PickerStatus>().len(), 3);
        assert_eq!(crate::workflow::chain_statuses::<BarcoderStatus>().len(), 3);
        assert_eq!(crate::workflow::chain_statuses::<TaggerStatus>().len(), 3);
        assert_eq!(crate::workflow::chain_statuses::<CheckerStatus>().len(), 3);
        assert_eq!(
            crate::workflow::chain_statuses::<TransferTaskStatus>().len(),
            3
        );
    }
}
