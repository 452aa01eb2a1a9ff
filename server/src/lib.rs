//! # Ticketline Server Library
//!
//! Core of a single-counter service queue. Customers take numbered tickets
//! tagged with a service category, an operator calls them in arrival order,
//! may re-announce the current one and marks it finished.
//!
//! The display layer is not part of this crate. It calls the manager's
//! operations and then reads the observers (or a [`queue_manager::QueueSnapshot`])
//! to re-render.
//!
//! ## Modules
//!
//! - [`queue_manager`] - Queue state, operations and the command/response boundary
//! - [`model`] - Tickets, call records and service categories
//! - [`clock`] - Injectable time source for call timestamps
//! - [`config`] - Layered configuration loading and validation
//! - [`logger`] - Logger setup for processes hosting a queue

pub mod clock;
pub mod config;
pub mod logger;
pub mod model;
pub mod queue_manager;
