//! HTTP protocol layer module
//!
//! Response construction shared by all endpoint handlers.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_413_response, build_500_response, build_empty_response,
    build_json_response,
};
