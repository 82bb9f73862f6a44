//! Outline Queries

use crate::domain::outline::ParsedOutline;

/// 解析 Markdown 大纲查询
#[derive(Debug, Clone)]
pub struct ParseOutline {
    pub markdown: String,
}

/// 校验大纲结构查询
#[derive(Debug, Clone)]
pub struct ValidateOutline {
    pub outline: ParsedOutline,
}

/// 导出大纲为 Markdown 查询
#[derive(Debug, Clone)]
pub struct ExportOutline {
    pub outline: ParsedOutline,
}
