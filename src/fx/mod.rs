//! Visual-effect settings with no engine dependency.

pub mod uv_scroll;

pub use uv_scroll::{UvOffset, UvScrollConfig, UvScroller};
