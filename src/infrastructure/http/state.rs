//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{
    // Command handlers
    LoadSensitiveWordsHandler,
    // Query handlers
    CheckSensitiveTextHandler, ExportOutlineHandler, MaskSensitiveTextHandler,
    ParseOutlineHandler, ValidateOutlineHandler,
    // Ports
    MarkdownTreePort, SensitiveFilterPort,
};
use crate::config::{OutlineConfig, SensitiveConfig};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub tree_builder: Arc<dyn MarkdownTreePort>,
    pub sensitive_filter: Arc<dyn SensitiveFilterPort>,

    /// 配置的敏感词表路径（reload 接口使用）
    pub sensitive_words_path: Option<PathBuf>,

    // ========== Command Handlers ==========
    pub load_sensitive_words_handler: LoadSensitiveWordsHandler,

    // ========== Query Handlers ==========
    pub parse_outline_handler: ParseOutlineHandler,
    pub validate_outline_handler: ValidateOutlineHandler,
    pub export_outline_handler: ExportOutlineHandler,
    pub check_sensitive_handler: CheckSensitiveTextHandler,
    pub mask_sensitive_handler: MaskSensitiveTextHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        tree_builder: Arc<dyn MarkdownTreePort>,
        sensitive_filter: Arc<dyn SensitiveFilterPort>,
        outline_config: &OutlineConfig,
        sensitive_config: &SensitiveConfig,
    ) -> Self {
        Self {
            // Ports
            tree_builder: tree_builder.clone(),
            sensitive_filter: sensitive_filter.clone(),
            sensitive_words_path: sensitive_config.words_path.clone(),

            // Command handlers
            load_sensitive_words_handler: LoadSensitiveWordsHandler::new(sensitive_filter.clone()),

            // Query handlers
            parse_outline_handler: ParseOutlineHandler::new(
                tree_builder.clone(),
                outline_config.max_input_bytes,
            ),
            validate_outline_handler: ValidateOutlineHandler::new(),
            export_outline_handler: ExportOutlineHandler::new(),
            check_sensitive_handler: CheckSensitiveTextHandler::new(sensitive_filter.clone()),
            mask_sensitive_handler: MaskSensitiveTextHandler::new(
                sensitive_filter.clone(),
                sensitive_config.mask_char,
            ),
        }
    }
}
