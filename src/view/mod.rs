//! Result presentation
//!
//! Rendering is pure: it takes an already ordered result list and a view
//! mode and produces text. No filtering or sorting happens here.

mod render;

pub use render::{render, ViewMode, EMPTY_NOTICE};
