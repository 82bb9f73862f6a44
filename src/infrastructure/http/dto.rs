//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{
    CheckSensitiveResponse, MaskSensitiveResponse, OutlineValidationResponse,
};
use crate::domain::outline::ParsedOutline;
use crate::domain::sensitive::SensitiveMatch;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Outline DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ParseOutlineRequest {
    pub markdown: String,
}

/// 解析结果：大纲本体 + 校验结论
#[derive(Debug, Serialize)]
pub struct ParseOutlineResponse {
    #[serde(flatten)]
    pub outline: ParsedOutline,
    pub valid: bool,
}

#[derive(Debug, Deserialize)]
pub struct OutlineRequest {
    pub outline: ParsedOutline,
}

#[derive(Debug, Serialize)]
pub struct ValidateOutlineResponse {
    pub valid: bool,
    pub volume_count: usize,
    pub chapter_count: usize,
    pub scene_count: usize,
}

impl From<OutlineValidationResponse> for ValidateOutlineResponse {
    fn from(r: OutlineValidationResponse) -> Self {
        Self {
            valid: r.valid,
            volume_count: r.volume_count,
            chapter_count: r.chapter_count,
            scene_count: r.scene_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportOutlineResponse {
    pub markdown: String,
}

// ============================================================================
// Sensitive DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CheckSensitiveRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CheckSensitiveResponseDto {
    pub contains: bool,
    pub matches: Vec<SensitiveMatch>,
}

impl From<CheckSensitiveResponse> for CheckSensitiveResponseDto {
    fn from(r: CheckSensitiveResponse) -> Self {
        Self {
            contains: r.contains,
            matches: r.matches,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MaskSensitiveRequest {
    pub text: String,
    #[serde(default)]
    pub mask: Option<char>,
}

#[derive(Debug, Serialize)]
pub struct MaskSensitiveResponseDto {
    pub text: String,
    pub count: usize,
}

impl From<MaskSensitiveResponse> for MaskSensitiveResponseDto {
    fn from(r: MaskSensitiveResponse) -> Self {
        Self {
            text: r.text,
            count: r.count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReloadSensitiveResponse {
    pub word_count: usize,
}
