//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod markdown_tree;
mod sensitive_filter;

pub use markdown_tree::{MarkdownTreeError, MarkdownTreePort};
pub use sensitive_filter::{SensitiveFilterError, SensitiveFilterPort};
