// Server module entry point
// Listener creation and per-connection serving

pub mod connection;
pub mod listener;

// Re-export commonly used functions
pub use connection::handle_connection;
pub use listener::create_reusable_listener;
