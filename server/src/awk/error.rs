//! Rendering error types.

/// Errors that can occur while rendering a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// No command registered under this name.
    #[error("command not found: {0:?}")]
    UnknownCommand(String),

    #[error("slice: to is out of range")]
    SliceToOutOfRange,

    #[error("slice: from is out of range")]
    SliceFromOutOfRange,

    #[error("slice: to is before from")]
    SliceToBeforeFrom,
}
