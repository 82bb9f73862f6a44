//! Outline Context - Markdown 文档树
//!
//! 与具体 Markdown 解析库无关的通用文档树。解析库适配器负责把各自的 AST
//! 转换成这里的结构，大纲遍历只依赖本模块。

/// 节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// 文档根
    Root,
    /// 标题，携带层级（1-6）
    Heading(u8),
    Paragraph,
    List,
    ListItem,
    Strong,
    Emphasis,
    /// 文本叶子（包括行内代码和原始 HTML）
    Text,
    /// 其他行内容器（链接、删除线等）
    Inline,
    /// 其他块级容器（引用、代码块等）
    Block,
}

impl NodeKind {
    /// 是否为行内节点
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeKind::Text | NodeKind::Strong | NodeKind::Emphasis | NodeKind::Inline
        )
    }
}

/// 文档树节点
///
/// 不变量:
/// - 只有 `Text` 节点携带 `value`
/// - 子节点顺序即文档顺序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdNode {
    pub kind: NodeKind,
    pub value: String,
    pub children: Vec<MdNode>,
}

impl MdNode {
    /// 创建容器节点
    pub fn new(kind: NodeKind, children: Vec<MdNode>) -> Self {
        Self {
            kind,
            value: String::new(),
            children,
        }
    }

    pub fn root(children: Vec<MdNode>) -> Self {
        Self::new(NodeKind::Root, children)
    }

    pub fn heading(depth: u8, children: Vec<MdNode>) -> Self {
        Self::new(NodeKind::Heading(depth), children)
    }

    pub fn paragraph(children: Vec<MdNode>) -> Self {
        Self::new(NodeKind::Paragraph, children)
    }

    pub fn list(items: Vec<MdNode>) -> Self {
        Self::new(NodeKind::List, items)
    }

    pub fn list_item(children: Vec<MdNode>) -> Self {
        Self::new(NodeKind::ListItem, children)
    }

    pub fn strong(children: Vec<MdNode>) -> Self {
        Self::new(NodeKind::Strong, children)
    }

    /// 创建文本叶子
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// 拼接所有后代文本叶子（不做 trim）
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in self.preorder() {
            if node.kind == NodeKind::Text {
                out.push_str(&node.value);
            }
        }
    }

    /// 深度优先查找第一个满足条件的后代节点（不含自身）
    pub fn find_descendant<F>(&self, predicate: &F) -> Option<&MdNode>
    where
        F: Fn(&MdNode) -> bool,
    {
        self.preorder().skip(1).find(|node| predicate(node))
    }

    /// 先序遍历（含自身），显式栈，不随嵌套深度递归
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
}

/// 先序遍历迭代器
pub struct Preorder<'a> {
    stack: Vec<&'a MdNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a MdNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl Drop for MdNode {
    // 逐层摘下子节点，释放深树时不递归
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
