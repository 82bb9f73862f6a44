//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：大纲解析/校验/导出、敏感词检测

mod outline_queries;
mod sensitive_queries;

pub mod handlers;

pub use outline_queries::*;
pub use sensitive_queries::*;
