//! Command Handlers 实现

mod sensitive_handlers;

pub use sensitive_handlers::*;
