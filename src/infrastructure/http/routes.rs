//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                GET   健康检查
//! - /api/outline/parse       POST  解析 Markdown 大纲
//! - /api/outline/validate    POST  校验大纲结构
//! - /api/outline/export      POST  导出大纲为 Markdown
//! - /api/sensitive/check     POST  检测敏感词
//! - /api/sensitive/mask      POST  屏蔽敏感词
//! - /api/sensitive/reload    POST  重新加载敏感词表

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/outline", outline_routes())
        .nest("/sensitive", sensitive_routes())
}

/// Outline 路由
fn outline_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/parse", post(handlers::parse_outline))
        .route("/validate", post(handlers::validate_outline))
        .route("/export", post(handlers::export_outline))
}

/// Sensitive 路由
fn sensitive_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/check", post(handlers::check_sensitive))
        .route("/mask", post(handlers::mask_sensitive))
        .route("/reload", post(handlers::reload_sensitive_words))
}
