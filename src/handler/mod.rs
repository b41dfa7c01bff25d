//! Request handler module
//!
//! Routing dispatch, the two canned endpoints, and request parameter capture.

pub mod issues;
pub mod params;
pub mod router;
pub mod statuses;

// Re-export main entry point
pub use router::handle_request;
