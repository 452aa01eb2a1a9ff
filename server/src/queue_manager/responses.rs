use super::types::QueueSnapshot;
use crate::model::Ticket;

/// Result of executing a [`QueueCommand`].
///
/// There is no error variant: every queue operation succeeds, and "nothing to
/// do" (empty line, nobody at the counter) is reported as `ticket: None`.
///
/// # Examples
///
/// ```no_run
/// use server::queue_manager::{QueueCommand, QueueManager, QueueResponse};
///
/// let mut manager = QueueManager::new();
/// match manager.execute_command(QueueCommand::CallNext) {
///     QueueResponse::TicketCalled { ticket: Some(ticket) } => {
///         println!("Now serving {}", ticket.label);
///     }
///     QueueResponse::TicketCalled { ticket: None } => {
///         println!("No more waiting customers.");
///     }
///     _ => {}
/// }
/// ```
///
/// [`QueueCommand`]: super::QueueCommand
#[derive(Debug, Clone, PartialEq)]
pub enum QueueResponse {
    /// A ticket was issued and queued.
    TicketIssued {
        /// Copy of the newly issued ticket
        ticket: Ticket,
    },

    /// The front ticket was called, or the line was empty.
    TicketCalled { ticket: Option<Ticket> },

    /// The current ticket to re-announce, if any.
    TicketRecalled { ticket: Option<Ticket> },

    /// The ticket that was current before finishing, if any.
    TicketFinished { ticket: Option<Ticket> },

    /// Current view of the queue.
    Snapshot { snapshot: QueueSnapshot },
}

impl QueueResponse {
    /// Ticket carried by the response, if it carries one.
    pub fn ticket(&self) -> Option<&Ticket> {
        match self {
            QueueResponse::TicketIssued { ticket } => Some(ticket),
            QueueResponse::TicketCalled { ticket }
            | QueueResponse::TicketRecalled { ticket }
            | QueueResponse::TicketFinished { ticket } => ticket.as_ref(),
            QueueResponse::Snapshot { .. } => None,
        }
    }
}
