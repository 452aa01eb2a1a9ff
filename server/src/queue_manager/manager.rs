use super::DEFAULT_HISTORY_LIMIT;
use super::commands::QueueCommand;
use super::responses::QueueResponse;
use super::types::QueueSnapshot;
use crate::clock::{Clock, SystemClock};
use crate::config::QueueConfig;
use crate::config::validation::{
    MAX_HISTORY_LIMIT, MAX_LABEL_WIDTH, MIN_HISTORY_LIMIT, MIN_LABEL_WIDTH,
};
use crate::model::{CallRecord, DEFAULT_LABEL_WIDTH, ServiceCategory, Ticket};
use std::collections::VecDeque;
use std::fmt;

/// Owner of all ticket-queue state for a single service counter.
///
/// Every state transition goes through the methods below. They run to
/// completion synchronously and never fail; "nothing to do" comes back as
/// `None`. Tickets handed out are clones, so callers cannot reach into the
/// queue through them.
///
/// A ticket moves `waiting -> current -> finished`. Once finished it has no
/// representation left in the manager apart from a detached [`CallRecord`]
/// that may still sit in the recent-calls history.
///
/// # Examples
///
/// ```no_run
/// use server::queue_manager::QueueManager;
/// use server::model::ServiceCategory;
///
/// let mut manager = QueueManager::new();
/// manager.issue_ticket(ServiceCategory::General);
/// manager.issue_ticket(ServiceCategory::Payments);
///
/// let first = manager.call_next().unwrap();
/// assert_eq!(first.label, "G001");
/// assert_eq!(manager.waiting_count(), 1);
/// ```
pub struct QueueManager {
    waiting_queue: VecDeque<Ticket>,
    last_issued_id: u64,
    current_ticket: Option<Ticket>,
    recent_calls: Vec<CallRecord>,

    // Limits
    history_limit: usize,
    label_width: usize,

    clock: Box<dyn Clock>,
}

impl QueueManager {
    /// Creates an empty manager stamping calls with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty manager that takes call timestamps from `clock`.
    ///
    /// # Arguments
    ///
    /// * `clock` - Any [`Clock`], including a `Fn() -> DateTime<Utc>` closure
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_limits(clock, DEFAULT_HISTORY_LIMIT, DEFAULT_LABEL_WIDTH)
    }

    /// Creates an empty manager using the limits from a loaded configuration.
    ///
    /// The configuration is expected to have passed [`QueueConfig::validate`];
    /// limits outside the validated ranges are clamped into them.
    pub fn from_config(config: &QueueConfig, clock: impl Clock + 'static) -> Self {
        Self::with_limits(clock, config.history_limit(), config.label_width())
    }

    fn with_limits(clock: impl Clock + 'static, history_limit: usize, label_width: usize) -> Self {
        let history_limit = history_limit.clamp(MIN_HISTORY_LIMIT, MAX_HISTORY_LIMIT);
        let label_width = label_width.clamp(MIN_LABEL_WIDTH, MAX_LABEL_WIDTH);

        log::info!(
            "Queue manager created (history limit: {history_limit}, label width: {label_width})"
        );

        Self {
            waiting_queue: VecDeque::new(),
            last_issued_id: 0,
            current_ticket: None,
            recent_calls: Vec::with_capacity(history_limit + 1),
            history_limit,
            label_width,
            clock: Box::new(clock),
        }
    }

    /// Issues a ticket for `service` and appends it to the back of the line.
    ///
    /// Unrecognized categories are accepted and get the `X` prefix.
    ///
    /// # Returns
    ///
    /// A copy of the new ticket
    pub fn issue_ticket(&mut self, service: impl Into<ServiceCategory>) -> Ticket {
        let service = service.into();
        self.last_issued_id += 1;

        let ticket = Ticket::new(self.last_issued_id, service, self.label_width);

        if !ticket.service.is_recognized() {
            log::debug!(
                "Unrecognized service '{}' issued with fallback prefix",
                ticket.service
            );
        }
        log::debug!(
            "Issued ticket {} ({}), {} waiting",
            ticket.label,
            ticket.service,
            self.waiting_queue.len() + 1
        );

        self.waiting_queue.push_back(ticket.clone());
        ticket
    }

    /// Calls the ticket at the front of the line.
    ///
    /// The called ticket replaces the current one even if that was never
    /// finished. A call record stamped by the clock is added to the front of
    /// the history and the oldest record is dropped past the limit.
    ///
    /// # Returns
    ///
    /// The called ticket, or `None` without touching any state when the line is empty
    pub fn call_next(&mut self) -> Option<Ticket> {
        let Some(next) = self.waiting_queue.pop_front() else {
            log::debug!("Call requested but no tickets are waiting");
            return None;
        };

        if let Some(unfinished) = &self.current_ticket {
            log::warn!(
                "Calling {} while {} was not finished",
                next.label,
                unfinished.label
            );
        }

        let record = CallRecord::for_ticket(&next, self.clock.now());
        self.recent_calls.insert(0, record);
        self.recent_calls.truncate(self.history_limit);

        log::debug!(
            "Called ticket {} ({}), {} waiting",
            next.label,
            next.service,
            self.waiting_queue.len()
        );

        self.current_ticket = Some(next.clone());
        Some(next)
    }

    /// Returns the current ticket again so it can be re-announced.
    ///
    /// Pure read: no call record is created and the line is untouched.
    pub fn recall_current(&self) -> Option<Ticket> {
        if let Some(current) = &self.current_ticket {
            log::debug!("Recalling ticket {}", current.label);
        }
        self.current_ticket.clone()
    }

    /// Clears the current ticket.
    ///
    /// # Returns
    ///
    /// The ticket that was current, or `None` if the counter was idle
    pub fn finish_current(&mut self) -> Option<Ticket> {
        let done = self.current_ticket.take();
        if let Some(ticket) = &done {
            log::debug!("Finished ticket {}", ticket.label);
        }
        done
    }

    /// Number of tickets waiting to be called.
    pub fn waiting_count(&self) -> usize {
        self.waiting_queue.len()
    }

    pub fn current_ticket(&self) -> Option<&Ticket> {
        self.current_ticket.as_ref()
    }

    /// Most recent calls, newest first, never longer than the history limit.
    pub fn recent_calls(&self) -> &[CallRecord] {
        &self.recent_calls
    }

    /// Waiting tickets in the order they will be called.
    pub fn waiting_tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.waiting_queue.iter()
    }

    pub fn last_issued_id(&self) -> u64 {
        self.last_issued_id
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Captures all observers in one value.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            waiting_count: self.waiting_count(),
            current_ticket: self.current_ticket.clone(),
            recent_calls: self.recent_calls.clone(),
        }
    }

    /// Executes a queue command and returns the matching response.
    ///
    /// Single entry point for a display layer; each command is forwarded to
    /// the method of the same name.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use server::queue_manager::{QueueCommand, QueueManager, QueueResponse};
    ///
    /// let mut manager = QueueManager::new();
    /// let response = manager.execute_command(QueueCommand::IssueTicket {
    ///     service: "CONSULTATION".into(),
    /// });
    /// assert_eq!(response.ticket().unwrap().label, "C001");
    /// ```
    pub fn execute_command(&mut self, command: QueueCommand) -> QueueResponse {
        log::debug!("Executing command: {command:?}");

        match command {
            QueueCommand::IssueTicket { service } => QueueResponse::TicketIssued {
                ticket: self.issue_ticket(service),
            },
            QueueCommand::CallNext => QueueResponse::TicketCalled {
                ticket: self.call_next(),
            },
            QueueCommand::RecallCurrent => QueueResponse::TicketRecalled {
                ticket: self.recall_current(),
            },
            QueueCommand::FinishCurrent => QueueResponse::TicketFinished {
                ticket: self.finish_current(),
            },
            QueueCommand::GetSnapshot => QueueResponse::Snapshot {
                snapshot: self.snapshot(),
            },
        }
    }
}

impl Default for QueueManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QueueManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueManager")
            .field("waiting_queue", &self.waiting_queue)
            .field("last_issued_id", &self.last_issued_id)
            .field("current_ticket", &self.current_ticket)
            .field("recent_calls", &self.recent_calls)
            .field("history_limit", &self.history_limit)
            .field("label_width", &self.label_width)
            .finish_non_exhaustive()
    }
}
