//! Moge (墨阁) - AI 辅助小说写作服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Outline Context: 卷/章/场景大纲的构建、校验、导出
//! - Sensitive Context: 敏感词表与命中结果
//!
//! 应用层 (application/):
//! - Ports: 端口定义（MarkdownTree, SensitiveFilter）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: pulldown-cmark 文档树、regex 敏感词匹配

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
