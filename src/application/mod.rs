//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（MarkdownTree、SensitiveFilter）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{LoadSensitiveWordsHandler, LoadSensitiveWordsResponse},
    LoadSensitiveWords,
};

pub use error::ApplicationError;

pub use ports::{MarkdownTreeError, MarkdownTreePort, SensitiveFilterError, SensitiveFilterPort};

pub use queries::{
    // Outline queries
    ExportOutline,
    ParseOutline,
    ValidateOutline,
    // Sensitive queries
    CheckSensitiveText,
    MaskSensitiveText,
    // Handlers
    handlers::{
        CheckSensitiveResponse, CheckSensitiveTextHandler, ExportOutlineHandler,
        ExportOutlineResponse, MaskSensitiveResponse, MaskSensitiveTextHandler,
        OutlineValidationResponse, ParseOutlineHandler, ValidateOutlineHandler,
        DEFAULT_MASK_CHAR, DEFAULT_MAX_INPUT_BYTES,
    },
};
