use thiserror::Error;

/// Errors raised where free-form UI input is translated into canvas types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// The tool name does not match any shape variant or the brush
    #[error("unknown tool: {0:?}")]
    UnknownTool(String),
}
