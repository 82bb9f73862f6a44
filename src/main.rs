//! Moge - AI 辅助小说写作服务
//!
//! - Domain: outline/, sensitive/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, adapters

use std::sync::Arc;

use moge::application::{LoadSensitiveWords, LoadSensitiveWordsHandler};
use moge::config::{load_config, print_config};
use moge::infrastructure::adapters::{
    PulldownTreeBuilder, RegexSensitiveFilter, SensitiveFilterConfig,
};
use moge::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},moge={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Moge - AI 辅助小说写作服务");
    print_config(&config);

    // 创建 Markdown 文档树构建器
    let tree_builder = Arc::new(PulldownTreeBuilder::new());

    // 创建敏感词过滤器
    let sensitive_filter = Arc::new(RegexSensitiveFilter::new(SensitiveFilterConfig {
        load_chunk_size: config.sensitive.load_chunk_size,
        case_insensitive: config.sensitive.case_insensitive,
    }));

    // 启动时加载词表
    if config.sensitive.enabled {
        if let Some(path) = config.sensitive.words_path.clone() {
            let loader = LoadSensitiveWordsHandler::new(sensitive_filter.clone());
            let loaded = loader.handle(LoadSensitiveWords { path }).await?;
            tracing::info!(word_count = loaded.word_count, "Sensitive filter ready");
        }
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_body_limit(config.server.body_limit_bytes);
    let state = AppState::new(
        tree_builder,
        sensitive_filter,
        &config.outline,
        &config.sensitive,
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
