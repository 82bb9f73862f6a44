//! Sensitive Command Handlers

use std::sync::Arc;

use crate::application::commands::LoadSensitiveWords;
use crate::application::error::ApplicationError;
use crate::application::ports::SensitiveFilterPort;
use crate::domain::sensitive::normalize_word_list;

/// 加载结果
#[derive(Debug, Clone)]
pub struct LoadSensitiveWordsResponse {
    pub word_count: usize,
}

/// LoadSensitiveWords Handler - 读取词表文件并替换当前词表
pub struct LoadSensitiveWordsHandler {
    filter: Arc<dyn SensitiveFilterPort>,
}

impl LoadSensitiveWordsHandler {
    pub fn new(filter: Arc<dyn SensitiveFilterPort>) -> Self {
        Self { filter }
    }

    pub async fn handle(
        &self,
        command: LoadSensitiveWords,
    ) -> Result<LoadSensitiveWordsResponse, ApplicationError> {
        let raw = tokio::fs::read_to_string(&command.path).await.map_err(|e| {
            ApplicationError::storage(format!(
                "Failed to read word list {}: {}",
                command.path.display(),
                e
            ))
        })?;

        let words = normalize_word_list(&raw);
        let word_count = self.filter.load(words).await?;

        tracing::info!(
            path = %command.path.display(),
            word_count,
            "Sensitive word list loaded"
        );

        Ok(LoadSensitiveWordsResponse { word_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{RegexSensitiveFilter, SensitiveFilterConfig};
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# 词表\n坏蛋\n混蛋\n坏蛋\n").unwrap();

        let filter = Arc::new(RegexSensitiveFilter::new(SensitiveFilterConfig::default()));
        let handler = LoadSensitiveWordsHandler::new(filter.clone());
        let response = handler
            .handle(LoadSensitiveWords {
                path: file.path().to_path_buf(),
            })
            .await
            .unwrap();

        assert_eq!(response.word_count, 2);
        assert!(filter.contains("你这个混蛋"));
    }

    #[tokio::test]
    async fn test_missing_file_is_storage_error() {
        let filter = Arc::new(RegexSensitiveFilter::new(SensitiveFilterConfig::default()));
        let handler = LoadSensitiveWordsHandler::new(filter);
        let result = handler
            .handle(LoadSensitiveWords {
                path: "/nonexistent/moge/words.txt".into(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::StorageError(_))));
    }
}
