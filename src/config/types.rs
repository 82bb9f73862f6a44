//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 大纲解析配置
    #[serde(default)]
    pub outline: OutlineConfig,

    /// 敏感词配置
    #[serde(default)]
    pub sensitive: SensitiveConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

fn default_body_limit() -> usize {
    4 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 大纲解析配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineConfig {
    /// 单次解析的 Markdown 最大字节数
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

fn default_max_input_bytes() -> usize {
    1024 * 1024
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

/// 敏感词配置
#[derive(Debug, Clone, Deserialize)]
pub struct SensitiveConfig {
    /// 是否在启动时加载词表
    #[serde(default)]
    pub enabled: bool,

    /// 词表文件路径（每行一个词）
    #[serde(default)]
    pub words_path: Option<PathBuf>,

    /// 分块加载时每块的词数
    #[serde(default = "default_load_chunk_size")]
    pub load_chunk_size: usize,

    /// 默认屏蔽字符
    #[serde(default = "default_mask_char")]
    pub mask_char: char,

    /// 是否忽略大小写
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

fn default_load_chunk_size() -> usize {
    1000
}

fn default_mask_char() -> char {
    '*'
}

fn default_case_insensitive() -> bool {
    true
}

impl Default for SensitiveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            words_path: None,
            load_chunk_size: default_load_chunk_size(),
            mask_char: default_mask_char(),
            case_insensitive: default_case_insensitive(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否输出 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
