//! Classification-and-relay pipeline

pub mod classifier;
pub mod coordinator;
pub mod normalizer;
pub mod outbound;
pub mod runner;

// Re-export the main types for convenience
pub use coordinator::RelayCoordinator;
pub use outbound::ChatOutbound;
pub use runner::{RunSummary, run_event_loop};
