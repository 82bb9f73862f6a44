//! Sensitive Queries

/// 检测文本中的敏感词
#[derive(Debug, Clone)]
pub struct CheckSensitiveText {
    pub text: String,
}

/// 屏蔽文本中的敏感词
#[derive(Debug, Clone)]
pub struct MaskSensitiveText {
    pub text: String,
    /// 屏蔽字符，None 时使用配置的默认值
    pub mask: Option<char>,
}
