//! Outline HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ExportOutline, ParseOutline, ValidateOutline};
use crate::infrastructure::http::dto::{
    ApiResponse, ExportOutlineResponse, OutlineRequest, ParseOutlineRequest,
    ParseOutlineResponse, ValidateOutlineResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解析 AI 生成的 Markdown 大纲
///
/// 无法识别任何标题时返回空大纲（valid=false），不作为错误
pub async fn parse_outline(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParseOutlineRequest>,
) -> Result<Json<ApiResponse<ParseOutlineResponse>>, ApiError> {
    let outline = state
        .parse_outline_handler
        .handle(ParseOutline {
            markdown: req.markdown,
        })?;
    let valid = outline.validate();

    tracing::info!(
        volumes = outline.volume_count(),
        chapters = outline.chapter_count(),
        valid,
        "Outline parse request handled"
    );

    Ok(Json(ApiResponse::success(ParseOutlineResponse {
        outline,
        valid,
    })))
}

/// 校验大纲结构
pub async fn validate_outline(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OutlineRequest>,
) -> Json<ApiResponse<ValidateOutlineResponse>> {
    let response = state
        .validate_outline_handler
        .handle(ValidateOutline {
            outline: req.outline,
        });
    Json(ApiResponse::success(response.into()))
}

/// 导出大纲为 Markdown
pub async fn export_outline(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OutlineRequest>,
) -> Json<ApiResponse<ExportOutlineResponse>> {
    let response = state.export_outline_handler.handle(ExportOutline {
        outline: req.outline,
    });
    Json(ApiResponse::success(ExportOutlineResponse {
        markdown: response.markdown,
    }))
}
