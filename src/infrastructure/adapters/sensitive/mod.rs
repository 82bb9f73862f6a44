//! Sensitive Adapter - 基于 regex 的敏感词过滤实现

mod regex_filter;

pub use regex_filter::{RegexSensitiveFilter, SensitiveFilterConfig};
