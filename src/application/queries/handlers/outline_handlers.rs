//! Outline Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MarkdownTreePort;
use crate::application::queries::{ExportOutline, ParseOutline, ValidateOutline};
use crate::domain::outline::{build_outline, render_markdown, ParsedOutline};

/// 默认最大输入大小：1MB
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

// ============================================================================
// Response DTOs
// ============================================================================

/// 校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineValidationResponse {
    pub valid: bool,
    pub volume_count: usize,
    pub chapter_count: usize,
    pub scene_count: usize,
}

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportOutlineResponse {
    pub markdown: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// ParseOutline Handler
///
/// 解析失败不会返回错误：任何文档树构建错误都得到空大纲
pub struct ParseOutlineHandler {
    tree_builder: Arc<dyn MarkdownTreePort>,
    max_input_bytes: usize,
}

impl ParseOutlineHandler {
    pub fn new(tree_builder: Arc<dyn MarkdownTreePort>, max_input_bytes: usize) -> Self {
        Self {
            tree_builder,
            max_input_bytes,
        }
    }

    /// 解析 Markdown 大纲（总是返回结果）
    pub fn parse(&self, markdown: &str) -> ParsedOutline {
        match self.tree_builder.parse_tree(markdown) {
            Ok(tree) => {
                let outline = build_outline(&tree);
                tracing::debug!(
                    input_bytes = markdown.len(),
                    volumes = outline.volume_count(),
                    chapters = outline.chapter_count(),
                    scenes = outline.scene_count(),
                    "Outline parsed"
                );
                outline
            }
            Err(e) => {
                tracing::warn!(error = %e, input_bytes = markdown.len(), "Outline parse failed, returning empty outline");
                ParsedOutline::empty()
            }
        }
    }

    /// 处理解析查询
    ///
    /// 唯一的错误：输入超过 `max_input_bytes`
    pub fn handle(&self, query: ParseOutline) -> Result<ParsedOutline, ApplicationError> {
        if query.markdown.len() > self.max_input_bytes {
            return Err(ApplicationError::validation(format!(
                "Markdown input too large: {} bytes (max {})",
                query.markdown.len(),
                self.max_input_bytes
            )));
        }
        Ok(self.parse(&query.markdown))
    }
}

/// ValidateOutline Handler
#[derive(Default)]
pub struct ValidateOutlineHandler;

impl ValidateOutlineHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: ValidateOutline) -> OutlineValidationResponse {
        let outline = &query.outline;
        OutlineValidationResponse {
            valid: outline.validate(),
            volume_count: outline.volume_count(),
            chapter_count: outline.chapter_count(),
            scene_count: outline.scene_count(),
        }
    }
}

/// ExportOutline Handler
#[derive(Default)]
pub struct ExportOutlineHandler;

impl ExportOutlineHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: ExportOutline) -> ExportOutlineResponse {
        let markdown = render_markdown(&query.outline);
        tracing::debug!(
            chapters = query.outline.chapter_count(),
            output_bytes = markdown.len(),
            "Outline exported"
        );
        ExportOutlineResponse { markdown }
    }
}
