//! All Slack-specific functionality

pub mod client;
pub mod directory;
pub mod events;
pub mod socket;

// Re-export main types for convenience
pub use client::SlackClient;
pub use directory::resolve_directory;
pub use events::to_message_event;
pub use socket::run_socket_mode;
