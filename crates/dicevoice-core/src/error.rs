//! Error types surfaced by the score keeper.

/// Ledger and registry failures. Every variant leaves state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Player '{0}' already exists")]
    DuplicatePlayer(String),

    #[error("Player name is empty")]
    EmptyPlayerName,

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
}

/// Failures reported by the external speech source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech recognition is not available")]
    Unavailable,

    #[error("Speech recognition error: {0}")]
    Recognition(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
