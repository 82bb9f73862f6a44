//! Sensitive Query Handlers

use std::sync::Arc;

use crate::application::ports::SensitiveFilterPort;
use crate::application::queries::{CheckSensitiveText, MaskSensitiveText};
use crate::domain::sensitive::SensitiveMatch;

/// 默认屏蔽字符
pub const DEFAULT_MASK_CHAR: char = '*';

// ============================================================================
// Response DTOs
// ============================================================================

/// 检测结果
#[derive(Debug, Clone)]
pub struct CheckSensitiveResponse {
    pub contains: bool,
    pub matches: Vec<SensitiveMatch>,
}

/// 屏蔽结果
#[derive(Debug, Clone)]
pub struct MaskSensitiveResponse {
    pub text: String,
    /// 命中次数
    pub count: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// CheckSensitiveText Handler
pub struct CheckSensitiveTextHandler {
    filter: Arc<dyn SensitiveFilterPort>,
}

impl CheckSensitiveTextHandler {
    pub fn new(filter: Arc<dyn SensitiveFilterPort>) -> Self {
        Self { filter }
    }

    pub fn handle(&self, query: CheckSensitiveText) -> CheckSensitiveResponse {
        let matches = self.filter.find_all(&query.text);
        if !matches.is_empty() {
            tracing::debug!(
                hits = matches.len(),
                text_chars = query.text.chars().count(),
                "Sensitive words detected"
            );
        }
        CheckSensitiveResponse {
            contains: !matches.is_empty(),
            matches,
        }
    }
}

/// MaskSensitiveText Handler
pub struct MaskSensitiveTextHandler {
    filter: Arc<dyn SensitiveFilterPort>,
    default_mask: char,
}

impl MaskSensitiveTextHandler {
    pub fn new(filter: Arc<dyn SensitiveFilterPort>, default_mask: char) -> Self {
        Self {
            filter,
            default_mask,
        }
    }

    pub fn handle(&self, query: MaskSensitiveText) -> MaskSensitiveResponse {
        let mask = query.mask.unwrap_or(self.default_mask);
        let count = self.filter.find_all(&query.text).len();
        let text = if count == 0 {
            query.text
        } else {
            self.filter.mask(&query.text, mask)
        };
        MaskSensitiveResponse { text, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{RegexSensitiveFilter, SensitiveFilterConfig};

    async fn loaded_filter(words: &[&str]) -> Arc<dyn SensitiveFilterPort> {
        let filter = RegexSensitiveFilter::new(SensitiveFilterConfig::default());
        filter
            .load(words.iter().map(|w| w.to_string()).collect())
            .await
            .unwrap();
        Arc::new(filter)
    }

    #[tokio::test]
    async fn test_check_reports_matches() {
        let handler = CheckSensitiveTextHandler::new(loaded_filter(&["坏蛋"]).await);
        let response = handler.handle(CheckSensitiveText {
            text: "他是个坏蛋".to_string(),
        });
        assert!(response.contains);
        assert_eq!(response.matches, vec![SensitiveMatch::new("坏蛋", 9, 15)]);
    }

    #[tokio::test]
    async fn test_check_clean_text() {
        let handler = CheckSensitiveTextHandler::new(loaded_filter(&["坏蛋"]).await);
        let response = handler.handle(CheckSensitiveText {
            text: "他是个好人".to_string(),
        });
        assert!(!response.contains);
        assert!(response.matches.is_empty());
    }

    #[tokio::test]
    async fn test_mask_uses_default_and_override() {
        let handler =
            MaskSensitiveTextHandler::new(loaded_filter(&["坏蛋"]).await, DEFAULT_MASK_CHAR);

        let response = handler.handle(MaskSensitiveText {
            text: "坏蛋和坏蛋".to_string(),
            mask: None,
        });
        assert_eq!(response.text, "**和**");
        assert_eq!(response.count, 2);

        let response = handler.handle(MaskSensitiveText {
            text: "坏蛋".to_string(),
            mask: Some('□'),
        });
        assert_eq!(response.text, "□□");
    }
}
