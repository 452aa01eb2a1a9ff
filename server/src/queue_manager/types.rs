use crate::model::{CallRecord, Ticket};
use serde::Serialize;

/// Read-only copy of the state a display renders after every operation.
///
/// Holds the same values the individual observers return, captured at one
/// point in time.
///
/// # Examples
///
/// ```no_run
/// use server::queue_manager::QueueManager;
///
/// let manager = QueueManager::new();
/// let snapshot = manager.snapshot();
/// println!("{}", snapshot.to_json().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    /// Number of tickets still waiting to be called
    pub waiting_count: usize,
    /// Ticket being served, if any
    pub current_ticket: Option<Ticket>,
    /// Most recent calls, newest first
    pub recent_calls: Vec<CallRecord>,
}

impl QueueSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Label of the current ticket, or the placeholder a display shows when idle.
    pub fn current_label(&self) -> &str {
        self.current_ticket
            .as_ref()
            .map(|ticket| ticket.label.as_str())
            .unwrap_or("—")
    }
}
