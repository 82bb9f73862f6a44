//! Markdown Tree Port - Markdown 文档树抽象
//!
//! 把 Markdown 文本转换为通用文档树，具体实现在 infrastructure/adapters 层。
//! 大纲构建只依赖 `MdNode`，与具体解析库解耦。

use thiserror::Error;

use crate::domain::outline::MdNode;

/// 文档树构建错误
#[derive(Debug, Error)]
pub enum MarkdownTreeError {
    /// 事件流不平衡（结束标签没有对应的开始标签等）
    #[error("Malformed markdown event stream: {0}")]
    Malformed(String),

    #[error("Markdown parser error: {0}")]
    Parser(String),
}

/// Markdown Tree Port
///
/// 实现需要满足的树形约定:
/// - 列表项中的行内内容总是包在 `Paragraph` 节点里（紧凑/松散列表一致）
/// - 行内代码、HTML 作为文本叶子
/// - 软换行作为 `"\n"` 文本叶子
pub trait MarkdownTreePort: Send + Sync {
    /// 将 Markdown 文本解析为文档树（根节点为 `NodeKind::Root`）
    fn parse_tree(&self, markdown: &str) -> Result<MdNode, MarkdownTreeError>;
}
