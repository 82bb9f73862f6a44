//! Sensitive Filter Port - 敏感词过滤抽象
//!
//! 词表加载是异步的（分块加载，期间让出调度），匹配是同步的

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::sensitive::SensitiveMatch;

/// 敏感词过滤错误
#[derive(Debug, Error)]
pub enum SensitiveFilterError {
    /// 词表编译失败（例如超出匹配器大小限制）
    #[error("Failed to build matcher: {0}")]
    BuildError(String),

    #[error("Filter lock poisoned")]
    LockPoisoned,
}

/// Sensitive Filter Port
#[async_trait]
pub trait SensitiveFilterPort: Send + Sync {
    /// 替换当前词表，返回加载的去重词数
    ///
    /// 加载完成前，旧词表继续生效
    async fn load(&self, words: Vec<String>) -> Result<usize, SensitiveFilterError>;

    /// 当前词数
    fn word_count(&self) -> usize;

    /// 自左向右查找所有不重叠的命中，同一位置长词优先
    fn find_all(&self, text: &str) -> Vec<SensitiveMatch>;

    /// 文本是否包含敏感词
    fn contains(&self, text: &str) -> bool {
        !self.find_all(text).is_empty()
    }

    /// 将命中的每个字符替换为 `mask`
    fn mask(&self, text: &str, mask: char) -> String {
        let matches = self.find_all(text);
        if matches.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in &matches {
            out.push_str(&text[last..m.start]);
            out.extend(std::iter::repeat(mask).take(text[m.start..m.end].chars().count()));
            last = m.end;
        }
        out.push_str(&text[last..]);
        out
    }
}
