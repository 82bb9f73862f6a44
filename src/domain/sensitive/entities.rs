//! Sensitive Context - Entities

use serde::{Deserialize, Serialize};

/// 一次敏感词命中
///
/// `start`/`end` 为输入文本中的字节偏移，`end` 不包含。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitiveMatch {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

impl SensitiveMatch {
    pub fn new(word: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }

    /// 命中的字符数
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }
}
