//! Execution engine
//!
//! CPU dispatch for the vector layer.

pub mod dispatcher;

pub use dispatcher::get_active_backend_name;
