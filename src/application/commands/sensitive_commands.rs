//! Sensitive Commands

use std::path::PathBuf;

/// 从文件加载敏感词表（替换当前词表）
#[derive(Debug, Clone)]
pub struct LoadSensitiveWords {
    pub path: PathBuf,
}
