//! Outline Context - 大纲限界上下文
//!
//! 职责:
//! - 卷/章/场景结构
//! - 从 Markdown 文档树构建大纲
//! - 大纲校验与 Markdown 导出

mod entities;
mod export;
mod patterns;
mod tree;
mod walker;

pub use entities::{Chapter, ParsedOutline, Volume};
pub use export::render_markdown;
pub use patterns::{clean_title, is_scene_marker, VOLUME_DESCRIPTION_MIN_CHARS};
pub use tree::{MdNode, NodeKind, Preorder};
pub use walker::build_outline;
