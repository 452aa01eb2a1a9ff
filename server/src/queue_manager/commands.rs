use crate::model::ServiceCategory;

/// Operations a display layer can request from the [`QueueManager`].
///
/// Each variant maps one-to-one onto a manager method, so a front end can
/// route button presses through a single entry point and match on the
/// returned [`QueueResponse`].
///
/// # Examples
///
/// ```no_run
/// use server::queue_manager::{QueueCommand, QueueManager};
///
/// let mut manager = QueueManager::new();
/// manager.execute_command(QueueCommand::IssueTicket {
///     service: "PAYMENTS".into(),
/// });
/// manager.execute_command(QueueCommand::CallNext);
/// ```
///
/// [`QueueManager`]: super::QueueManager
/// [`QueueResponse`]: super::QueueResponse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueCommand {
    /// Issue a new ticket and put it at the back of the line.
    IssueTicket {
        /// Requested service category
        service: ServiceCategory,
    },

    /// Take the front ticket and make it the current one.
    CallNext,

    /// Re-announce the current ticket without changing anything.
    RecallCurrent,

    /// Mark the current ticket as served.
    FinishCurrent,

    /// Read everything a display needs to refresh.
    GetSnapshot,
}
