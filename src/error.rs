use thiserror::Error;

/// Domain errors surfaced across the engine/presentation boundary.
///
/// Persistence I/O keeps plain `io::Result` (see `save_manager`); these
/// cover the two failure modes the game logic itself can produce.
#[derive(Debug, Error)]
pub enum GameError {
    /// A profession name that is not one of the implemented classes.
    #[error("{0} is not an implemented profession")]
    InvalidProfession(String),

    /// The presentation layer was asked to render a prompt it cannot handle.
    #[error("cannot render prompt {key:?}: {reason}")]
    UnhandledPromptType { key: String, reason: String },
}
