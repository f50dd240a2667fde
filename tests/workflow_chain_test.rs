//! Structural checks over every status chain: three statuses, two steps,
//! a single entry point and a single dead end.

use warehouse_admin_api::models::{
    AdjustmentStatus, BarcoderStatus, CheckerStatus, DeliveryStatus, OrderStatus, PickerStatus,
    PurchaseOrderStatus, ReturnStatus, TaggerStatus, TransferStatus, TransferTaskStatus,
    WithdrawalStatus,
};
use warehouse_admin_api::workflow::{self, WorkflowStatus};

fn assert_linear_chain<S: WorkflowStatus + std::fmt::Debug>() {
    let statuses = workflow::chain_statuses::<S>();
    assert_eq!(statuses.len(), 3, "chain must have three statuses");
    assert_eq!(statuses[0], S::initial());
    assert!(!S::initial().is_terminal());
    assert!(statuses[2].is_terminal());

    // Every non-terminal status advances exactly one step.
    let mut current = S::initial();
    let mut steps = 0;
    while !current.is_terminal() {
        let transition = workflow::advance(current, true).unwrap_or_else(|e| {
            panic!("status {current} should advance: {e}");
        });
        assert_eq!(transition.from, current);
        current = transition.to;
        steps += 1;
        assert!(steps <= 2, "chain must terminate in two steps");
    }
    assert_eq!(steps, 2);

    // The dead end refuses to move.
    assert!(workflow::advance(current, true).is_err());
}

#[test]
fn document_chains_are_linear() {
    assert_linear_chain::<AdjustmentStatus>();
    assert_linear_chain::<WithdrawalStatus>();
    assert_linear_chain::<PurchaseOrderStatus>();
    assert_linear_chain::<OrderStatus>();
    assert_linear_chain::<TransferStatus>();
    assert_linear_chain::<DeliveryStatus>();
    assert_linear_chain::<ReturnStatus>();
}

#[test]
fn task_chains_are_linear() {
    assert_linear_chain::<PickerStatus>();
    assert_linear_chain::<BarcoderStatus>();
    assert_linear_chain::<TaggerStatus>();
    assert_linear_chain::<CheckerStatus>();
    assert_linear_chain::<TransferTaskStatus>();
}

#[test]
fn chain_actions_match_the_screens() {
    let actions: Vec<&str> = AdjustmentStatus::transitions()
        .iter()
        .map(|t| t.action)
        .collect();
    assert_eq!(actions, vec!["Post", "Approve"]);

    let actions: Vec<&str> = DeliveryStatus::transitions()
        .iter()
        .map(|t| t.action)
        .collect();
    assert_eq!(actions, vec!["Dispatch", "Mark Delivered"]);
}

#[test]
fn in_transit_statuses_render_with_spaces() {
    assert_eq!(
        workflow::chain_statuses::<TransferStatus>()[1].to_string(),
        "In Transit"
    );
    assert_eq!(
        workflow::chain_statuses::<DeliveryStatus>()[1].to_string(),
        "In Transit"
    );
}
