//! 大纲导出为 Markdown
//!
//! 输出格式与解析规则一致：`###` 卷、`####` 章、`- **场景N**：描述` 场景。

use super::patterns::is_scene_marker;
use super::{Chapter, ParsedOutline};

/// 将大纲渲染为 Markdown 文本
///
/// 独立章节在前，各卷按顺序在后。
pub fn render_markdown(outline: &ParsedOutline) -> String {
    let mut out = String::new();

    for chapter in &outline.direct_chapters {
        render_chapter(&mut out, chapter);
    }

    for volume in &outline.volumes {
        out.push_str(&format!("### {}\n\n", volume.title.trim()));
        if let Some(description) = volume.description.as_deref() {
            let description = description.trim();
            if !description.is_empty() {
                out.push_str(&format!("{}\n\n", description));
            }
        }
        for chapter in &volume.chapters {
            render_chapter(&mut out, chapter);
        }
    }

    out.truncate(out.trim_end().len());
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn render_chapter(out: &mut String, chapter: &Chapter) {
    out.push_str(&format!("#### {}\n\n", chapter.title.trim()));

    let mut rendered_any = false;
    for (index, scene) in chapter.scenes.iter().enumerate() {
        let (marker, description) = split_scene(scene)
            .unwrap_or_else(|| (format!("场景{}", index + 1), scene.trim().to_string()));
        // 空描述的场景回读时会被丢弃，导出时直接跳过
        if description.is_empty() {
            continue;
        }
        out.push_str(&format!("- **{}**：{}\n", marker, description));
        rendered_any = true;
    }
    if rendered_any {
        out.push('\n');
    }
}

/// 拆分已带标记的场景文本（`场景N：描述`）
fn split_scene(scene: &str) -> Option<(String, String)> {
    let (marker, description) = scene.split_once(['：', ':'])?;
    let marker = marker.trim();
    is_scene_marker(marker).then(|| (marker.to_string(), description.trim().to_string()))
}
