//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `MOGE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `MOGE_SERVER__PORT=8080`
/// - `MOGE_OUTLINE__MAX_INPUT_BYTES=2097152`
/// - `MOGE_SENSITIVE__ENABLED=true`
/// - `MOGE_SENSITIVE__WORDS_PATH=/data/words.txt`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5070)?
        .set_default("server.body_limit_bytes", 4 * 1024 * 1024)?
        .set_default("outline.max_input_bytes", 1024 * 1024)?
        .set_default("sensitive.enabled", false)?
        .set_default("sensitive.load_chunk_size", 1000)?
        .set_default("sensitive.mask_char", "*")?
        .set_default("sensitive.case_insensitive", true)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: MOGE_SERVER__PORT=8080
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("MOGE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.outline.max_input_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Outline max_input_bytes cannot be 0".to_string(),
        ));
    }

    if config.sensitive.load_chunk_size == 0 {
        return Err(ConfigError::ValidationError(
            "Sensitive load_chunk_size cannot be 0".to_string(),
        ));
    }

    if config.sensitive.enabled && config.sensitive.words_path.is_none() {
        return Err(ConfigError::ValidationError(
            "Sensitive words_path is required when sensitive filter is enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Body Limit: {} bytes", config.server.body_limit_bytes);
    tracing::info!("Outline Max Input: {} bytes", config.outline.max_input_bytes);
    tracing::info!("Sensitive Filter Enabled: {}", config.sensitive.enabled);
    if let Some(path) = &config.sensitive.words_path {
        tracing::info!("Sensitive Word List: {:?}", path);
        tracing::info!("Sensitive Load Chunk Size: {}", config.sensitive.load_chunk_size);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_max_input() {
        let mut config = AppConfig::default();
        config.outline.max_input_bytes = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_enabled_filter_without_words() {
        let mut config = AppConfig::default();
        config.sensitive.enabled = true;
        assert!(validate_config(&config).is_err());

        config.sensitive.words_path = Some("words.txt".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[outline]\nmax_input_bytes = 2048\n\n[sensitive]\nmask_char = \"#\"\n"
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.outline.max_input_bytes, 2048);
        assert_eq!(config.sensitive.mask_char, '#');
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/moge.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
