//! 标题识别规则
//!
//! 卷/章/场景标题都由「标记字 + 数字 + 标记字」组成。数字只做识别，不做求值：
//! 顺序完全取决于文档位置。

use std::sync::LazyLock;

use regex::Regex;

/// 数字字符集：ASCII 数字、全角数字、中文数字
const NUMERAL_CLASS: &str = "[0-9０-９一二三四五六七八九十百千万]+";

/// 卷描述生效的最小尾部长度（按字符计）
pub const VOLUME_DESCRIPTION_MIN_CHARS: usize = 10;

static VOLUME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s)^第{}卷(.*)$", NUMERAL_CLASS)).expect("Invalid volume regex")
});

static CHAPTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s)^第{}章(.*)$", NUMERAL_CLASS)).expect("Invalid chapter regex")
});

static SCENE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s)^场景{}[：:]?(.*)$", NUMERAL_CLASS)).expect("Invalid scene regex")
});

static SCENE_MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^场景{}$", NUMERAL_CLASS)).expect("Invalid scene marker regex")
});

/// `<...>` 注释块
static ANNOTATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("Invalid annotation regex"));

/// 卷标题识别结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeHeading {
    pub title: String,
    pub description: Option<String>,
}

/// 去掉第一个 `<...>` 注释块及其后的全部内容，再 trim
pub fn clean_title(text: &str) -> String {
    let kept = match ANNOTATION_PATTERN.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    };
    kept.trim().to_string()
}

/// 识别卷标题（三级标题）
pub fn match_volume(text: &str) -> Option<VolumeHeading> {
    let caps = VOLUME_PATTERN.captures(text)?;
    let title = clean_title(text);
    if title.is_empty() {
        return None;
    }

    let raw_trailer = caps.get(1).map_or("", |m| m.as_str());
    let description = if raw_trailer.chars().count() > VOLUME_DESCRIPTION_MIN_CHARS {
        let cleaned = clean_title(raw_trailer);
        let cleaned = cleaned.trim_start_matches(['：', ':']).trim();
        (!cleaned.is_empty()).then(|| cleaned.to_string())
    } else {
        None
    };

    Some(VolumeHeading { title, description })
}

/// 识别章标题（四级标题），返回清理后的标题
pub fn match_chapter(text: &str) -> Option<String> {
    if !CHAPTER_PATTERN.is_match(text) {
        return None;
    }
    let title = clean_title(text);
    (!title.is_empty()).then_some(title)
}

/// 识别场景标题（五级标题），返回清理后的场景描述（可能为空）
pub fn match_scene(text: &str) -> Option<String> {
    let caps = SCENE_PATTERN.captures(text)?;
    Some(clean_title(caps.get(1).map_or("", |m| m.as_str())))
}

/// 加粗文本是否恰好是「场景N」
pub fn is_scene_marker(text: &str) -> bool {
    SCENE_MARKER_PATTERN.is_match(text)
}

/// 从段落全文中去掉开头的场景标记及紧随的冒号
pub fn strip_scene_marker<'a>(paragraph: &'a str, marker: &str) -> &'a str {
    let rest = paragraph.trim_start();
    let rest = rest.strip_prefix(marker).unwrap_or(rest);
    let rest = rest
        .strip_prefix('：')
        .or_else(|| rest.strip_prefix(':'))
        .unwrap_or(rest);
    rest.trim()
}
