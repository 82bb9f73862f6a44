//! Markdown Adapter - pulldown-cmark 文档树实现

mod pulldown_tree;

pub use pulldown_tree::PulldownTreeBuilder;
