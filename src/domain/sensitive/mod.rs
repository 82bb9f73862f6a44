//! Sensitive Context - 敏感词限界上下文
//!
//! 职责:
//! - 词表规范化
//! - 匹配结果

mod entities;
mod value_objects;

pub use entities::SensitiveMatch;
pub use value_objects::normalize_word_list;
