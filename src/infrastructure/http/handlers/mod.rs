//! HTTP Handlers

mod outline;
mod ping;
mod sensitive;

pub use outline::*;
pub use ping::*;
pub use sensitive::*;
