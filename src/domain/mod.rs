//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Outline Context: 大纲解析与导出
//! - Sensitive Context: 敏感词

pub mod outline;
pub mod sensitive;
