//! Outline Context - Entities

use serde::{Deserialize, Serialize};

/// 解析结果根节点
///
/// 不变量:
/// - 每个章节只属于 `volumes[*].chapters` 或 `direct_chapters` 之一
/// - 卷、章、场景均按文档顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOutline {
    #[serde(default)]
    pub volumes: Vec<Volume>,
    #[serde(default)]
    pub direct_chapters: Vec<Chapter>,
}

impl ParsedOutline {
    /// 空结果（解析失败或没有可识别标题时返回）
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty() && self.direct_chapters.is_empty()
    }

    /// 结构是否可用
    ///
    /// 既没有卷也没有独立章节、或任一卷标题为空/没有章节时返回 false。
    pub fn validate(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.volumes
            .iter()
            .all(|v| !v.title.trim().is_empty() && !v.chapters.is_empty())
    }

    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }

    /// 章节总数（含卷内章节和独立章节）
    pub fn chapter_count(&self) -> usize {
        self.direct_chapters.len() + self.volumes.iter().map(|v| v.chapters.len()).sum::<usize>()
    }

    /// 场景总数
    pub fn scene_count(&self) -> usize {
        self.chapters().map(|c| c.scenes.len()).sum()
    }

    /// 按文档顺序遍历所有章节：先独立章节，再各卷章节
    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.direct_chapters
            .iter()
            .chain(self.volumes.iter().flat_map(|v| v.chapters.iter()))
    }
}

/// 卷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Volume {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            chapters: Vec::new(),
        }
    }
}

/// 章节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    #[serde(default)]
    pub scenes: Vec<String>,
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scenes: Vec::new(),
        }
    }

    /// 追加场景，空内容被丢弃
    pub fn push_scene(&mut self, scene: impl Into<String>) -> bool {
        let scene = scene.into();
        if scene.is_empty() {
            return false;
        }
        self.scenes.push(scene);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume_with_chapter(title: &str) -> Volume {
        let mut volume = Volume::new(title);
        volume.chapters.push(Chapter::new("第一章 初见"));
        volume
    }

    #[test]
    fn test_empty_outline_is_invalid() {
        assert!(!ParsedOutline::empty().validate());
    }

    #[test]
    fn test_direct_chapters_only_is_valid() {
        let outline = ParsedOutline {
            volumes: vec![],
            direct_chapters: vec![Chapter::new("第一章 独立成章")],
        };
        assert!(outline.validate());
    }

    #[test]
    fn test_volume_without_chapters_is_invalid() {
        let outline = ParsedOutline {
            volumes: vec![Volume::new("第一卷")],
            direct_chapters: vec![Chapter::new("第一章")],
        };
        assert!(!outline.validate());
    }

    #[test]
    fn test_volume_with_blank_title_is_invalid() {
        let outline = ParsedOutline {
            volumes: vec![volume_with_chapter("   ")],
            direct_chapters: vec![],
        };
        assert!(!outline.validate());
    }

    #[test]
    fn test_counts() {
        let mut volume = volume_with_chapter("第一卷");
        volume.chapters[0].push_scene("主角登场");
        volume.chapters[0].push_scene("");
        let outline = ParsedOutline {
            volumes: vec![volume],
            direct_chapters: vec![Chapter::new("序章")],
        };
        assert_eq!(outline.volume_count(), 1);
        assert_eq!(outline.chapter_count(), 2);
        assert_eq!(outline.scene_count(), 1);
    }

    #[test]
    fn test_serialize_camel_case() {
        let outline = ParsedOutline {
            volumes: vec![volume_with_chapter("第一卷 初入江湖")],
            direct_chapters: vec![],
        };
        let json = serde_json::to_value(&outline).unwrap();
        assert!(json.get("directChapters").is_some());
        // 未设置的 description 不输出
        assert!(json["volumes"][0].get("description").is_none());
        assert_eq!(json["volumes"][0]["chapters"][0]["scenes"], serde_json::json!([]));
    }
}
