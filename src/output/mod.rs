//! Output module for presenting display models
//!
//! This module handles:
//! - Rendering statistics, search results, notices, and tab state as terminal text
//! - Serializing the same display models as JSON for scripting

mod json;
mod text;
mod traits;

pub use json::JsonRenderer;
pub use text::TextRenderer;
pub use traits::Renderer;

use std::sync::Arc;

/// Picks the renderer for the requested output format
pub fn renderer(json: bool) -> Arc<dyn Renderer + Send + Sync> {
    if json {
        Arc::new(JsonRenderer)
    } else {
        Arc::new(TextRenderer)
    }
}
