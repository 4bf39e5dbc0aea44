//! Error types for the overlay engine

use thiserror::Error;

/// Overlay engine error types
#[derive(Debug, Error)]
pub enum OverlayError {
    /// Compiled input violated an invariant the engine depends on
    #[error("script error: {0}")]
    Script(#[from] ass_script::ScriptError),
}
