use chrono::{DateTime, TimeZone, Utc};
use claims::*;
use server::model::{CallRecord, ServiceCategory};
use server::queue_manager::{QueueCommand, QueueManager, QueueResponse};

fn opening_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 8, 30, 0).unwrap()
}

fn fixed_manager() -> QueueManager {
    QueueManager::with_clock(opening_time)
}

fn labels_and_services(calls: &[CallRecord]) -> Vec<(&str, &ServiceCategory)> {
    calls
        .iter()
        .map(|call| (call.label.as_str(), &call.service))
        .collect()
}

#[test]
fn test_counter_session_walkthrough() {
    let mut manager = fixed_manager();

    let g1 = manager.issue_ticket(ServiceCategory::General);
    let p2 = manager.issue_ticket(ServiceCategory::Payments);
    let g3 = manager.issue_ticket(ServiceCategory::General);
    assert_eq!(
        [g1.label.as_str(), p2.label.as_str(), g3.label.as_str()],
        ["G001", "P002", "G003"]
    );
    assert_eq!(manager.waiting_count(), 3);

    let called = assert_some!(manager.call_next());
    assert_eq!(called.label, "G001");
    assert_eq!(manager.waiting_count(), 2);
    assert_eq!(
        labels_and_services(manager.recent_calls()),
        vec![("G001", &ServiceCategory::General)]
    );
    assert_eq!(manager.recent_calls()[0].called_at, opening_time());

    let finished = assert_some!(manager.finish_current());
    assert_eq!(finished, g1);
    assert_none!(manager.current_ticket());

    let called = assert_some!(manager.call_next());
    assert_eq!(called.label, "P002");
    assert_eq!(
        labels_and_services(manager.recent_calls()),
        vec![
            ("P002", &ServiceCategory::Payments),
            ("G001", &ServiceCategory::General)
        ]
    );
}

#[test]
fn test_unrecognized_service_gets_fallback_prefix() {
    let mut manager = fixed_manager();
    let ticket = manager.issue_ticket("VIP");

    assert_eq!(ticket.label, "X001");
    assert_eq!(ticket.service.to_string(), "VIP");
}

#[test]
fn test_idle_counter_returns_nothing() {
    let mut manager = fixed_manager();

    assert_none!(manager.call_next());
    assert_none!(manager.recall_current());
    assert_none!(manager.finish_current());
    assert_eq!(manager.waiting_count(), 0);
    assert!(manager.recent_calls().is_empty());
}

#[test]
fn test_finish_then_recall_is_empty() {
    let mut manager = fixed_manager();
    manager.issue_ticket(ServiceCategory::Consultation);
    manager.call_next();

    assert_some!(manager.finish_current());
    assert_none!(manager.recall_current());
    assert_none!(manager.finish_current());
    assert_eq!(manager.recent_calls().len(), 1);
}

#[test]
fn test_labels_widen_past_three_digits() {
    let mut manager = fixed_manager();
    let mut last = None;
    for _ in 0..1000 {
        last = Some(manager.issue_ticket(ServiceCategory::Payments));
    }

    let last = assert_some!(last);
    assert_eq!(last.id, 1000);
    assert_eq!(last.label, "P1000");
}

#[test]
fn test_display_layer_round_through_commands() {
    let mut manager = fixed_manager();

    for service in ["GENERAL", "CONSULTATION"] {
        let response = manager.execute_command(QueueCommand::IssueTicket {
            service: service.into(),
        });
        assert!(matches!(response, QueueResponse::TicketIssued { .. }));
    }

    let response = manager.execute_command(QueueCommand::CallNext);
    assert_eq!(assert_some!(response.ticket()).label, "G001");

    let QueueResponse::Snapshot { snapshot } = manager.execute_command(QueueCommand::GetSnapshot)
    else {
        panic!("expected snapshot");
    };
    assert_eq!(snapshot.waiting_count, 1);
    assert_eq!(snapshot.current_label(), "G001");
    assert_eq!(snapshot.recent_calls[0].to_string(), "G001 – GENERAL");

    manager.execute_command(QueueCommand::FinishCurrent);
    let response = manager.execute_command(QueueCommand::RecallCurrent);
    assert_eq!(response, QueueResponse::TicketRecalled { ticket: None });
}
