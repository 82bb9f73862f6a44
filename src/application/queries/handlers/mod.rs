//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod outline_handlers;
mod sensitive_handlers;

pub use outline_handlers::*;
pub use sensitive_handlers::*;
