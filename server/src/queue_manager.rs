//! # Queue Manager Module
//!
//! Owns the state of a single-counter ticket queue: issuing numbered tickets,
//! calling them in strict FIFO order, tracking the ticket currently being
//! served and keeping a short most-recent-first history of calls.
//!
//! ## Core Components
//!
//! - [`QueueManager`] - Sole owner and mutator of queue state
//! - [`QueueCommand`] / [`QueueResponse`] - Command/response pattern for a display layer
//! - [`QueueSnapshot`] - Everything a display needs to re-render in one value
//!
//! ## Usage
//!
//! ```no_run
//! use server::queue_manager::QueueManager;
//! use server::model::ServiceCategory;
//!
//! let mut manager = QueueManager::new();
//! let ticket = manager.issue_ticket(ServiceCategory::General);
//! assert_eq!(ticket.label, "G001");
//!
//! let called = manager.call_next();
//! assert_eq!(called.map(|t| t.label), Some("G001".to_string()));
//! manager.finish_current();
//! ```

pub use self::commands::QueueCommand;
pub use self::manager::QueueManager;
pub use self::responses::QueueResponse;
pub use self::types::QueueSnapshot;

/// Command definitions accepted by the manager
pub mod commands;
/// Main queue manager implementation
pub mod manager;
/// Response types returned for each command
pub mod responses;
/// Read-only views of queue state
pub mod types;

/// Default number of entries kept in the recent-calls history.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;
