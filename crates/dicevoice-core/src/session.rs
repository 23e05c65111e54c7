//! The score keeper: one game's ledger, vocabulary and speech source.
//!
//! All front-end commands and all speech events go through a single
//! [`ScoreKeeper`], one at a time. Only a successfully resolved command
//! changes the ledger; everything else is recorded for feedback and dropped.

use crate::error::{Result, SpeechError};
use crate::ledger::ScoreLedger;
use crate::normalize::tokenize;
use crate::resolver::{resolve, ResolvedCommand};
use crate::sheet::{PlayerRow, ScoreSheet};
use crate::speech::{ListeningSession, SpeechEvent, SpeechRecognizer};
use crate::vocabulary::Vocabulary;
use dicevoice_config::{AppConfig, ConfigError};
use tracing::{debug, info, warn};

/// What happened to a speech event.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechOutcome {
    /// A final transcript resolved and was applied
    Applied(ResolvedCommand),
    /// A final transcript did not resolve; nothing changed
    Unresolved(String),
    /// Interim transcript, or an event that arrived while not listening
    Ignored,
    /// The source ended; listening stopped
    Ended,
    /// The source failed; listening stopped
    Failed(SpeechError),
}

pub struct ScoreKeeper {
    ledger: ScoreLedger,
    vocabulary: Vocabulary,
    recognizer: Box<dyn SpeechRecognizer>,
    listening: Option<ListeningSession>,
    last_raw: Option<String>,
    last_resolved: Option<ResolvedCommand>,
    notice: Option<String>,
}

impl ScoreKeeper {
    pub fn new(vocabulary: Vocabulary, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self {
            ledger: ScoreLedger::new(),
            vocabulary,
            recognizer,
            listening: None,
            last_raw: None,
            last_resolved: None,
            notice: None,
        }
    }

    /// Build from configuration. Configured players form the starting
    /// roster and are not part of the undo history.
    pub fn from_config(
        config: &AppConfig,
        recognizer: Box<dyn SpeechRecognizer>,
    ) -> std::result::Result<Self, ConfigError> {
        let vocabulary = Vocabulary::from_config(&config.vocabulary)?;
        let mut keeper = Self::new(vocabulary, recognizer);
        for name in &config.players {
            if let Err(err) = keeper.ledger.add_player(name) {
                warn!(player = %name, error = %err, "skipping configured player");
            }
        }
        keeper.ledger.clear_history();
        Ok(keeper)
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn add_player(&mut self, name: &str) -> Result<()> {
        self.ledger.add_player(name)
    }

    /// Resolve a raw transcript and apply it. Returns the applied command,
    /// or `None` when the text did not resolve (state unchanged apart from
    /// the recorded raw text).
    pub fn apply_command(&mut self, raw: &str) -> Option<ResolvedCommand> {
        self.last_raw = Some(raw.to_string());
        let tokens = tokenize(raw);
        let Some(command) = resolve(&tokens, self.ledger.registry(), &self.vocabulary) else {
            debug!(raw, "command not resolved");
            return None;
        };

        if let Err(err) = self
            .ledger
            .apply_score(&command.player, command.combination, command.points)
        {
            // resolve() only returns registered players
            warn!(error = %err, "resolved command rejected by ledger");
            return None;
        }
        self.notice = None;
        self.last_resolved = Some(command.clone());
        Some(command)
    }

    pub fn reset_scores(&mut self) {
        self.ledger.reset_scores();
    }

    /// Start over with no players and no history.
    pub fn new_game(&mut self) {
        self.ledger.new_game();
        self.last_raw = None;
        self.last_resolved = None;
        self.notice = None;
    }

    pub fn undo(&mut self) -> bool {
        self.ledger.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.ledger.redo()
    }

    pub fn is_listening(&self) -> bool {
        self.listening.is_some()
    }

    pub fn start_listening(&mut self) -> std::result::Result<(), SpeechError> {
        if self.listening.is_some() {
            return Ok(());
        }
        if !self.recognizer.is_available() {
            return Err(SpeechError::Unavailable);
        }
        self.listening = Some(self.recognizer.start()?);
        self.notice = None;
        info!("listening started");
        Ok(())
    }

    pub fn stop_listening(&mut self) {
        if let Some(session) = self.listening.take() {
            session.stop();
            info!("listening stopped");
        }
    }

    /// Wait for the next speech event. Never completes while not listening.
    pub async fn next_speech_event(&mut self) -> SpeechEvent {
        match self.listening.as_mut() {
            Some(session) => session.next_event().await,
            None => std::future::pending().await,
        }
    }

    pub fn handle_speech_event(&mut self, event: SpeechEvent) -> SpeechOutcome {
        if self.listening.is_none() {
            return SpeechOutcome::Ignored;
        }
        match event {
            SpeechEvent::Transcript(transcript) if transcript.is_final => {
                debug!(
                    text = %transcript.text,
                    confidence = transcript.confidence,
                    "final transcript"
                );
                match self.apply_command(&transcript.text) {
                    Some(command) => SpeechOutcome::Applied(command),
                    None => SpeechOutcome::Unresolved(transcript.text),
                }
            }
            SpeechEvent::Transcript(transcript) => {
                debug!(
                    text = %transcript.text,
                    confidence = transcript.confidence,
                    "ignoring interim transcript"
                );
                SpeechOutcome::Ignored
            }
            SpeechEvent::End => {
                self.stop_listening();
                SpeechOutcome::Ended
            }
            SpeechEvent::Error(message) => {
                warn!(error = %message, "speech recognition failed");
                self.stop_listening();
                self.notice = Some(message.clone());
                SpeechOutcome::Failed(SpeechError::Recognition(message))
            }
        }
    }

    pub fn last_raw(&self) -> Option<&str> {
        self.last_raw.as_deref()
    }

    pub fn last_resolved(&self) -> Option<&ResolvedCommand> {
        self.last_resolved.as_ref()
    }

    pub fn sheet(&self) -> ScoreSheet {
        ScoreSheet {
            players: self.ledger.players().iter().map(PlayerRow::from).collect(),
            undo_depth: self.ledger.undo_depth(),
            redo_depth: self.ledger.redo_depth(),
            last_raw: self.last_raw.clone(),
            last_resolved: self.last_resolved.clone(),
            listening: self.is_listening(),
            notice: self.notice.clone(),
        }
    }
}

impl std::fmt::Debug for ScoreKeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreKeeper")
            .field("ledger", &self.ledger)
            .field("listening", &self.listening)
            .field("last_raw", &self.last_raw)
            .field("last_resolved", &self.last_resolved)
            .finish_non_exhaustive()
    }
}
