//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod markdown;
pub mod sensitive;

pub use markdown::*;
pub use sensitive::*;
