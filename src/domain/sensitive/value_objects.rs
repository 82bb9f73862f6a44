//! Sensitive Context - Value Objects

use std::collections::HashSet;

/// 规范化词表文本
///
/// 规则:
/// 1. 每行一个词，首尾空白去掉
/// 2. 跳过空行和 `#` 开头的注释行
/// 3. 去重，保留首次出现的顺序
pub fn normalize_word_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}
