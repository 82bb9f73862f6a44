//! Sensitive Word HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{CheckSensitiveText, LoadSensitiveWords, MaskSensitiveText};
use crate::infrastructure::http::dto::{
    ApiResponse, CheckSensitiveRequest, CheckSensitiveResponseDto, MaskSensitiveRequest,
    MaskSensitiveResponseDto, ReloadSensitiveResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 检测敏感词
pub async fn check_sensitive(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckSensitiveRequest>,
) -> Json<ApiResponse<CheckSensitiveResponseDto>> {
    let response = state
        .check_sensitive_handler
        .handle(CheckSensitiveText { text: req.text });
    Json(ApiResponse::success(response.into()))
}

/// 屏蔽敏感词
pub async fn mask_sensitive(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MaskSensitiveRequest>,
) -> Json<ApiResponse<MaskSensitiveResponseDto>> {
    let response = state.mask_sensitive_handler.handle(MaskSensitiveText {
        text: req.text,
        mask: req.mask,
    });
    Json(ApiResponse::success(response.into()))
}

/// 重新加载配置的敏感词表
pub async fn reload_sensitive_words(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ReloadSensitiveResponse>>, ApiError> {
    let path = state
        .sensitive_words_path
        .clone()
        .ok_or_else(|| ApiError::BadRequest("No sensitive word list configured".to_string()))?;

    let response = state
        .load_sensitive_words_handler
        .handle(LoadSensitiveWords { path })
        .await?;

    Ok(Json(ApiResponse::success(ReloadSensitiveResponse {
        word_count: response.word_count,
    })))
}
