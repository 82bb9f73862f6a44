//! pulldown-cmark 文档树构建器
//!
//! 实现 MarkdownTreePort：把 pulldown-cmark 的事件流折叠成 `MdNode` 树

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

use crate::application::ports::{MarkdownTreeError, MarkdownTreePort};
use crate::domain::outline::{MdNode, NodeKind};

/// 容器最大嵌套层数（不含根），更深的容器被摊平到第 64 层的容器中
pub const MAX_NESTING_DEPTH: usize = 64;

/// pulldown-cmark 文档树构建器
///
/// 无状态，可在多线程间共享
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownTreeBuilder;

impl PulldownTreeBuilder {
    pub fn new() -> Self {
        Self
    }
}

/// 启用表格和删除线扩展
fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

impl MarkdownTreePort for PulldownTreeBuilder {
    fn parse_tree(&self, markdown: &str) -> Result<MdNode, MarkdownTreeError> {
        // 栈底是根节点，栈顶是当前打开的容器
        let mut stack: Vec<MdNode> = vec![MdNode::root(Vec::new())];
        // 超过层数上限后被摊平（未入栈）的容器数
        let mut flattened = 0usize;

        for event in Parser::new_ext(markdown, parser_options()) {
            match event {
                Event::Start(_) if stack.len() > MAX_NESTING_DEPTH => flattened += 1,
                Event::Start(tag) => stack.push(MdNode::new(node_kind(&tag), Vec::new())),
                Event::End(_) if flattened > 0 => flattened -= 1,
                Event::End(_) => {
                    if stack.len() < 2 {
                        return Err(MarkdownTreeError::Malformed(
                            "end tag without matching start".to_string(),
                        ));
                    }
                    let Some(mut node) = stack.pop() else {
                        break;
                    };
                    if node.kind == NodeKind::ListItem {
                        wrap_inline_children(&mut node);
                    }
                    push_child(&mut stack, node)?;
                }
                Event::Text(text)
                | Event::Code(text)
                | Event::Html(text)
                | Event::InlineHtml(text) => push_child(&mut stack, MdNode::text(&*text))?,
                Event::SoftBreak => push_child(&mut stack, MdNode::text("\n"))?,
                _ => {}
            }
        }

        if flattened > 0 {
            tracing::debug!(flattened, "Markdown nesting depth capped");
        }
        if stack.len() != 1 {
            return Err(MarkdownTreeError::Malformed(format!(
                "{} unclosed container(s) at end of input",
                stack.len() - 1
            )));
        }
        stack
            .pop()
            .ok_or_else(|| MarkdownTreeError::Malformed("empty node stack".to_string()))
    }
}

fn push_child(stack: &mut [MdNode], node: MdNode) -> Result<(), MarkdownTreeError> {
    let parent = stack
        .last_mut()
        .ok_or_else(|| MarkdownTreeError::Malformed("empty node stack".to_string()))?;
    parent.children.push(node);
    Ok(())
}

fn node_kind(tag: &Tag<'_>) -> NodeKind {
    match tag {
        Tag::Heading { level, .. } => NodeKind::Heading(heading_depth(*level)),
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::List(_) => NodeKind::List,
        Tag::Item => NodeKind::ListItem,
        Tag::Strong => NodeKind::Strong,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Link { .. } | Tag::Image { .. } | Tag::Strikethrough => NodeKind::Inline,
        _ => NodeKind::Block,
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// 紧凑列表的列表项没有段落标签，把连续的行内子节点包成段落
fn wrap_inline_children(item: &mut MdNode) {
    if !item.children.iter().any(|c| c.kind.is_inline()) {
        return;
    }

    let mut wrapped = Vec::with_capacity(item.children.len());
    let mut inline_run: Vec<MdNode> = Vec::new();
    for child in std::mem::take(&mut item.children) {
        if child.kind.is_inline() {
            inline_run.push(child);
            continue;
        }
        if !inline_run.is_empty() {
            wrapped.push(MdNode::paragraph(std::mem::take(&mut inline_run)));
        }
        wrapped.push(child);
    }
    if !inline_run.is_empty() {
        wrapped.push(MdNode::paragraph(inline_run));
    }
    item.children = wrapped;
}
