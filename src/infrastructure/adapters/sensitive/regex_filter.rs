//! Regex Sensitive Filter
//!
//! 实现 SensitiveFilterPort：把词表编译成一个多模式匹配器
//! （regex 对纯字面量交替使用 Aho-Corasick 预过滤）。
//!
//! 词表可能有数万条：加载时按块拼接模式并在块之间让出 tokio 调度，
//! 编译在阻塞线程池上进行，不占用异步工作线程。

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;
use regex::{Regex, RegexBuilder};

use crate::application::ports::{SensitiveFilterError, SensitiveFilterPort};
use crate::domain::sensitive::SensitiveMatch;

/// 编译后匹配器的大小上限
const MATCHER_SIZE_LIMIT: usize = 256 * 1024 * 1024;

/// 敏感词过滤器配置
#[derive(Debug, Clone)]
pub struct SensitiveFilterConfig {
    /// 每块处理的词数
    pub load_chunk_size: usize,
    /// 是否忽略大小写
    pub case_insensitive: bool,
}

impl Default for SensitiveFilterConfig {
    fn default() -> Self {
        Self {
            load_chunk_size: 1000,
            case_insensitive: true,
        }
    }
}

struct Matcher {
    regex: Regex,
    word_count: usize,
}

/// 基于 regex 的敏感词过滤器
///
/// 词表整体替换：新匹配器编译完成后才换入，读者看不到半加载状态
pub struct RegexSensitiveFilter {
    config: SensitiveFilterConfig,
    matcher: RwLock<Option<Matcher>>,
}

impl RegexSensitiveFilter {
    pub fn new(config: SensitiveFilterConfig) -> Self {
        Self {
            config,
            matcher: RwLock::new(None),
        }
    }
}

#[async_trait]
impl SensitiveFilterPort for RegexSensitiveFilter {
    async fn load(&self, words: Vec<String>) -> Result<usize, SensitiveFilterError> {
        let mut seen = HashSet::new();
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();

        // 交替是最左优先：长词排在前面，同一位置优先命中长词
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        let chunk_size = self.config.load_chunk_size.max(1);
        let mut pattern = String::new();
        for (index, chunk) in words.chunks(chunk_size).enumerate() {
            for word in chunk {
                if !pattern.is_empty() {
                    pattern.push('|');
                }
                pattern.push_str(&regex::escape(word));
            }
            tracing::trace!(chunk = index, words = chunk.len(), "Sensitive word chunk processed");
            tokio::task::yield_now().await;
        }

        let word_count = words.len();
        let matcher = if words.is_empty() {
            None
        } else {
            // 编译耗时与词表大小成正比，放到阻塞线程池执行
            let case_insensitive = self.config.case_insensitive;
            let regex = tokio::task::spawn_blocking(move || {
                RegexBuilder::new(&pattern)
                    .case_insensitive(case_insensitive)
                    .size_limit(MATCHER_SIZE_LIMIT)
                    .dfa_size_limit(MATCHER_SIZE_LIMIT)
                    .build()
            })
            .await
            .map_err(|e| SensitiveFilterError::BuildError(format!("compile task failed: {}", e)))?
            .map_err(|e| SensitiveFilterError::BuildError(e.to_string()))?;
            Some(Matcher { regex, word_count })
        };

        let mut guard = self
            .matcher
            .write()
            .map_err(|_| SensitiveFilterError::LockPoisoned)?;
        *guard = matcher;

        tracing::debug!(word_count, "Sensitive matcher rebuilt");
        Ok(word_count)
    }

    fn word_count(&self) -> usize {
        self.matcher
            .read()
            .map(|guard| guard.as_ref().map_or(0, |m| m.word_count))
            .unwrap_or(0)
    }

    fn find_all(&self, text: &str) -> Vec<SensitiveMatch> {
        let Ok(guard) = self.matcher.read() else {
            tracing::error!("Sensitive matcher lock poisoned");
            return Vec::new();
        };
        let Some(matcher) = guard.as_ref() else {
            return Vec::new();
        };

        matcher
            .regex
            .find_iter(text)
            .map(|m| SensitiveMatch::new(m.as_str(), m.start(), m.end()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_filter_matches_nothing() {
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig::default());
        assert_eq!(filter.word_count(), 0);
        assert!(!filter.contains("任何文本"));
        assert_eq!(filter.mask("任何文本", '*'), "任何文本");
    }

    #[tokio::test]
    async fn test_load_dedupes_and_counts() {
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig::default());
        let count = filter.load(words(&["坏蛋", " 坏蛋 ", "", "混蛋"])).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(filter.word_count(), 2);
    }

    #[tokio::test]
    async fn test_longer_word_wins_at_same_position() {
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig::default());
        filter.load(words(&["坏", "坏蛋"])).await.unwrap();

        let matches = filter.find_all("大坏蛋");
        assert_eq!(matches, vec![SensitiveMatch::new("坏蛋", 3, 9)]);
    }

    #[tokio::test]
    async fn test_mask_preserves_char_count() {
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig::default());
        filter.load(words(&["坏蛋", "abc"])).await.unwrap();

        let text = "你这坏蛋说ABC";
        let masked = filter.mask(text, '*');
        assert_eq!(masked, "你这**说***");
        assert_eq!(masked.chars().count(), text.chars().count());
    }

    #[tokio::test]
    async fn test_case_sensitive_config() {
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig {
            load_chunk_size: 10,
            case_insensitive: false,
        });
        filter.load(words(&["abc"])).await.unwrap();
        assert!(filter.contains("xabcx"));
        assert!(!filter.contains("ABC"));
    }

    #[tokio::test]
    async fn test_small_chunks_load_everything() {
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig {
            load_chunk_size: 1,
            case_insensitive: true,
        });
        let list: Vec<String> = (0..50).map(|i| format!("词{}号", i)).collect();
        assert_eq!(filter.load(list).await.unwrap(), 50);
        assert!(filter.contains("这是词49号"));
        assert!(filter.contains("这是词0号"));
    }

    #[tokio::test]
    async fn test_reload_replaces_word_set() {
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig::default());
        filter.load(words(&["旧词"])).await.unwrap();
        filter.load(words(&["新词"])).await.unwrap();
        assert!(!filter.contains("旧词"));
        assert!(filter.contains("新词"));

        filter.load(Vec::new()).await.unwrap();
        assert_eq!(filter.word_count(), 0);
        assert!(!filter.contains("新词"));
    }

    #[tokio::test]
    async fn test_runtime_keeps_running_during_large_load() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        // 单块加载：工作线程只在编译期间才有机会运行其他任务
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig {
            load_chunk_size: 100_000,
            case_insensitive: true,
        });
        let list: Vec<String> = (0..20_000).map(|i| format!("敏感词{}号", i)).collect();

        let ticks = Arc::new(AtomicUsize::new(0));
        let ticker = {
            let ticks = ticks.clone();
            tokio::spawn(async move {
                loop {
                    ticks.fetch_add(1, Ordering::Relaxed);
                    tokio::task::yield_now().await;
                }
            })
        };

        assert_eq!(filter.load(list).await.unwrap(), 20_000);
        ticker.abort();

        assert!(ticks.load(Ordering::Relaxed) > 10);
        assert!(filter.contains("这里有敏感词19999号"));
    }

    #[tokio::test]
    async fn test_regex_metacharacters_are_literal() {
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig::default());
        filter.load(words(&["a.b", "(x)"])).await.unwrap();
        assert!(filter.contains("a.b"));
        assert!(!filter.contains("axb"));
        assert!(filter.contains("(x)"));
    }
}
