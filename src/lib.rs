//! Order intake through a five-state tape automaton, feeding a greedy
//! earliest-available machine scheduler.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod report;
pub mod scheduler;
pub mod state_machine;
pub mod ui;

pub use error::SchedulerError;
pub use orchestrator::OrderOrchestrator;
pub use report::Schedule;
