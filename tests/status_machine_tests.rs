use cardinal_server_lib::services::card_order_service::CardOrderStatus;
use cardinal_server_lib::services::order_service::OrderStatus;
use cardinal_server_lib::services::payment_service::CheckoutState;

#[test]
fn order_status_allows_forward_transitions() {
    assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Processing));
    assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
    assert!(OrderStatus::Processing.can_transition_to(OrderStatus::Shipped));
    assert!(OrderStatus::Processing.can_transition_to(OrderStatus::Cancelled));
    assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Delivered));
}

#[test]
fn order_status_rejects_skips_and_reversals() {
    assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Shipped));
    assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
    assert!(!OrderStatus::Processing.can_transition_to(OrderStatus::Pending));
    assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::Cancelled));
    assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Pending));
    assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Processing));
}

#[test]
fn terminal_order_statuses_have_no_outgoing_edges() {
    let all = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    for terminal in [OrderStatus::Delivered, OrderStatus::Cancelled] {
        assert!(terminal.is_terminal());
        for next in all {
            assert!(!terminal.can_transition_to(next));
        }
    }
}

#[test]
fn order_status_parses_case_insensitively() {
    assert_eq!("pending".parse::<OrderStatus>(), Ok(OrderStatus::Pending));
    assert_eq!("Shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
    assert_eq!(
        "DELIVERED".parse::<OrderStatus>(),
        Ok(OrderStatus::Delivered)
    );
    assert!("unknown".parse::<OrderStatus>().is_err());
    assert!("".parse::<OrderStatus>().is_err());
}

#[test]
fn order_status_round_trips_through_as_str() {
    for status in [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ] {
        assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
    }
}

#[test]
fn card_order_status_follows_its_own_table() {
    assert!(CardOrderStatus::Pending.can_transition_to(CardOrderStatus::Processing));
    assert!(CardOrderStatus::Pending.can_transition_to(CardOrderStatus::Cancelled));
    assert!(CardOrderStatus::Processing.can_transition_to(CardOrderStatus::Completed));
    assert!(CardOrderStatus::Processing.can_transition_to(CardOrderStatus::Cancelled));

    assert!(!CardOrderStatus::Pending.can_transition_to(CardOrderStatus::Completed));
    assert!(!CardOrderStatus::Completed.can_transition_to(CardOrderStatus::Pending));
    assert!(!CardOrderStatus::Cancelled.can_transition_to(CardOrderStatus::Processing));

    assert!(CardOrderStatus::Completed.is_terminal());
    assert!(CardOrderStatus::Cancelled.is_terminal());
    assert!(!CardOrderStatus::Pending.is_terminal());
}

#[test]
fn checkout_state_permits_retry_after_failure() {
    assert!(CheckoutState::Created.can_transition_to(CheckoutState::IntentRequested));
    assert!(CheckoutState::IntentRequested.can_transition_to(CheckoutState::Confirming));
    assert!(CheckoutState::Confirming.can_transition_to(CheckoutState::Succeeded));
    assert!(CheckoutState::Confirming.can_transition_to(CheckoutState::Failed));
    assert!(CheckoutState::Failed.can_transition_to(CheckoutState::IntentRequested));

    assert!(!CheckoutState::Succeeded.can_transition_to(CheckoutState::IntentRequested));
    assert!(!CheckoutState::Created.can_transition_to(CheckoutState::Succeeded));
    assert!(!CheckoutState::Failed.can_transition_to(CheckoutState::Succeeded));
}
