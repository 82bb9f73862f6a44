//! 大纲构建
//!
//! 对文档树做一次深度优先遍历，按标题层级识别卷/章/场景。
//! 遍历状态（当前卷、当前章）只存在于一次构建过程中。

use super::patterns::{
    is_scene_marker, match_chapter, match_scene, match_volume, strip_scene_marker,
};
use super::tree::{MdNode, NodeKind};
use super::{Chapter, ParsedOutline, Volume};

const VOLUME_DEPTH: u8 = 3;
const CHAPTER_DEPTH: u8 = 4;
const SCENE_DEPTH: u8 = 5;

/// 从文档树构建大纲
///
/// 无法识别的标题被跳过；没有任何可识别标题时返回空大纲。
pub fn build_outline(root: &MdNode) -> ParsedOutline {
    let mut builder = OutlineBuilder::default();
    for node in root.preorder() {
        builder.visit(node);
    }
    builder.finish()
}

#[derive(Default)]
struct OutlineBuilder {
    outline: ParsedOutline,
    current_volume: Option<Volume>,
    current_chapter: Option<Chapter>,
}

impl OutlineBuilder {
    fn visit(&mut self, node: &MdNode) {
        match node.kind {
            NodeKind::Heading(depth) => self.on_heading(depth, node),
            NodeKind::ListItem => self.on_list_item(node),
            _ => {}
        }
    }

    fn on_heading(&mut self, depth: u8, node: &MdNode) {
        let text = node.plain_text();
        let text = text.trim();

        match depth {
            VOLUME_DEPTH => {
                if let Some(heading) = match_volume(text) {
                    self.flush_chapter();
                    self.flush_volume();
                    let mut volume = Volume::new(heading.title);
                    volume.description = heading.description;
                    self.current_volume = Some(volume);
                }
            }
            CHAPTER_DEPTH => {
                if let Some(title) = match_chapter(text) {
                    self.flush_chapter();
                    self.current_chapter = Some(Chapter::new(title));
                }
            }
            SCENE_DEPTH => {
                if let (Some(scene), Some(chapter)) = (match_scene(text), self.current_chapter.as_mut()) {
                    chapter.push_scene(scene);
                }
            }
            _ => {}
        }
    }

    /// 列表项中的加粗场景标记：`- **场景1**：描述`
    fn on_list_item(&mut self, item: &MdNode) {
        let Some(chapter) = self.current_chapter.as_mut() else {
            return;
        };

        // 只看列表项直属段落，嵌套列表由各自的列表项处理
        for paragraph in item
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::Paragraph)
        {
            let marker = paragraph.find_descendant(&|n: &MdNode| {
                n.kind == NodeKind::Strong && is_scene_marker(n.plain_text().trim())
            });
            let Some(marker) = marker else {
                continue;
            };

            let marker_text = marker.plain_text();
            let marker_text = marker_text.trim();
            let full_text = paragraph.plain_text();
            let description = strip_scene_marker(&full_text, marker_text);
            if !description.is_empty() {
                chapter.push_scene(format!("{}：{}", marker_text, description));
            }
            return;
        }
    }

    fn flush_chapter(&mut self) {
        if let Some(chapter) = self.current_chapter.take() {
            match self.current_volume.as_mut() {
                Some(volume) => volume.chapters.push(chapter),
                None => self.outline.direct_chapters.push(chapter),
            }
        }
    }

    fn flush_volume(&mut self) {
        if let Some(volume) = self.current_volume.take() {
            self.outline.volumes.push(volume);
        }
    }

    fn finish(mut self) -> ParsedOutline {
        self.flush_chapter();
        self.flush_volume();
        self.outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(depth: u8, text: &str) -> MdNode {
        MdNode::heading(depth, vec![MdNode::text(text)])
    }

    fn bold_scene_item(marker: &str, rest: &str) -> MdNode {
        MdNode::list_item(vec![MdNode::paragraph(vec![
            MdNode::strong(vec![MdNode::text(marker)]),
            MdNode::text(rest),
        ])])
    }

    #[test]
    fn test_volume_chapter_scene() {
        let tree = MdNode::root(vec![
            h(3, "第一卷 初入江湖"),
            h(4, "第一章 初见"),
            h(5, "场景1 主角登场"),
        ]);
        let outline = build_outline(&tree);

        assert!(outline.direct_chapters.is_empty());
        assert_eq!(outline.volumes.len(), 1);
        assert_eq!(outline.volumes[0].title, "第一卷 初入江湖");
        assert_eq!(outline.volumes[0].chapters.len(), 1);
        assert_eq!(outline.volumes[0].chapters[0].title, "第一章 初见");
        assert_eq!(outline.volumes[0].chapters[0].scenes, vec!["主角登场"]);
    }

    #[test]
    fn test_chapter_without_volume_is_direct() {
        let outline = build_outline(&MdNode::root(vec![h(4, "第一章 独立成章")]));
        assert!(outline.volumes.is_empty());
        assert_eq!(outline.direct_chapters, vec![Chapter::new("第一章 独立成章")]);
    }

    #[test]
    fn test_chapters_before_first_volume_are_direct() {
        let tree = MdNode::root(vec![
            h(4, "第一章 楔子"),
            h(3, "第一卷 开端"),
            h(4, "第二章 出发"),
        ]);
        let outline = build_outline(&tree);
        assert_eq!(outline.direct_chapters.len(), 1);
        assert_eq!(outline.direct_chapters[0].title, "第一章 楔子");
        assert_eq!(outline.volumes[0].chapters[0].title, "第二章 出发");
    }

    #[test]
    fn test_volume_order_preserved() {
        let tree = MdNode::root(vec![
            h(3, "第三卷 终"),
            h(4, "第一章 a"),
            h(3, "第一卷 始"),
            h(4, "第二章 b"),
            h(3, "第二卷 中"),
        ]);
        let outline = build_outline(&tree);
        let titles: Vec<_> = outline.volumes.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["第三卷 终", "第一卷 始", "第二卷 中"]);
        assert_eq!(outline.volumes[2].chapters.len(), 0);
    }

    #[test]
    fn test_bold_scene_marker_in_list_item() {
        let tree = MdNode::root(vec![
            h(4, "第一章 初见"),
            MdNode::list(vec![bold_scene_item("场景1", "：夜色下的对峙")]),
        ]);
        let outline = build_outline(&tree);
        assert_eq!(
            outline.direct_chapters[0].scenes,
            vec!["场景1：夜色下的对峙"]
        );
    }

    #[test]
    fn test_bold_scene_marker_with_trailing_text_ignored() {
        let tree = MdNode::root(vec![
            h(4, "第一章 初见"),
            MdNode::list(vec![bold_scene_item("场景1：夜色", "下的对峙")]),
        ]);
        let outline = build_outline(&tree);
        assert!(outline.direct_chapters[0].scenes.is_empty());
    }

    #[test]
    fn test_bold_scene_marker_without_description_ignored() {
        let tree = MdNode::root(vec![
            h(4, "第一章 初见"),
            MdNode::list(vec![bold_scene_item("场景1", "：  ")]),
        ]);
        let outline = build_outline(&tree);
        assert!(outline.direct_chapters[0].scenes.is_empty());
    }

    #[test]
    fn test_scene_without_open_chapter_dropped() {
        let tree = MdNode::root(vec![
            h(5, "场景1 无处安放"),
            MdNode::list(vec![bold_scene_item("场景2", "：也无处安放")]),
            h(3, "第一卷 开端"),
            h(5, "场景3 仍然无处安放"),
        ]);
        let outline = build_outline(&tree);
        assert_eq!(outline.chapter_count(), 0);
        assert_eq!(outline.volumes.len(), 1);
    }

    #[test]
    fn test_empty_scene_heading_dropped() {
        let tree = MdNode::root(vec![h(4, "第一章 初见"), h(5, "场景1")]);
        let outline = build_outline(&tree);
        assert!(outline.direct_chapters[0].scenes.is_empty());
    }

    #[test]
    fn test_unrecognized_headings_skipped() {
        let tree = MdNode::root(vec![
            h(1, "第一卷 一级标题不算"),
            h(3, "卷首语"),
            h(4, "尾声"),
            MdNode::paragraph(vec![MdNode::text("Just some prose.")]),
        ]);
        assert_eq!(build_outline(&tree), ParsedOutline::empty());
    }

    #[test]
    fn test_heading_text_trimmed_before_matching() {
        let tree = MdNode::root(vec![MdNode::heading(
            4,
            vec![MdNode::text("  第一章 "), MdNode::strong(vec![MdNode::text("初见")])],
        )]);
        let outline = build_outline(&tree);
        assert_eq!(outline.direct_chapters[0].title, "第一章 初见");
    }

    #[test]
    fn test_deeply_nested_chapter_found() {
        let mut node = h(4, "第一章 深处");
        for _ in 0..100_000 {
            node = MdNode::new(NodeKind::Block, vec![node]);
        }
        let outline = build_outline(&MdNode::root(vec![node]));
        assert_eq!(outline.direct_chapters, vec![Chapter::new("第一章 深处")]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let tree = MdNode::root(vec![
            h(3, "第一卷 初入江湖"),
            h(4, "第一章 初见"),
            h(5, "场景1 主角登场"),
            h(4, "第二章 再见"),
        ]);
        assert_eq!(build_outline(&tree), build_outline(&tree));
    }
}
