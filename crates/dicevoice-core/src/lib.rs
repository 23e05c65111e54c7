//! dicevoice-core: voice command interpreter and score ledger for dice poker.
//!
//! A spoken command has the shape `<player> <combination> <points>`, for
//! example "Дима единицы 5". The pipeline is:
//!
//! - [`normalize`]: raw transcript to canonical tokens
//! - [`resolver`]: longest-prefix matching of player name, combination alias
//!   and a single points token
//! - [`ledger`]: applies the result to the score sheet with full-snapshot
//!   undo/redo
//!
//! [`ScoreKeeper`] ties these together with a [`speech`] source and produces
//! [`ScoreSheet`] snapshots for rendering.

pub mod error;
pub mod history;
pub mod ledger;
pub mod matcher;
pub mod normalize;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod sheet;
pub mod speech;
pub mod vocabulary;

pub use error::{LedgerError, SpeechError};
pub use ledger::ScoreLedger;
pub use normalize::{normalize, tokenize};
pub use registry::{Player, PlayerRegistry};
pub use resolver::{resolve, ResolvedCommand};
pub use session::{ScoreKeeper, SpeechOutcome};
pub use sheet::{PlayerRow, ScoreCell, ScoreSheet};
pub use speech::{
    ChannelRecognizer, ListeningSession, SpeechEvent, SpeechFeed, SpeechRecognizer, Transcript,
};
pub use vocabulary::{Combination, Vocabulary};
