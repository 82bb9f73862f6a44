//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：敏感词表加载

mod sensitive_commands;

pub mod handlers;

pub use sensitive_commands::*;
