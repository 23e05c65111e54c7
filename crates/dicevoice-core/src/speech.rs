//! Speech source abstraction.
//!
//! A recognizer is an external producer of [`SpeechEvent`]s. Starting it
//! yields a [`ListeningSession`], which owns the event stream and stops the
//! recognizer when it is stopped or dropped.

use crate::error::SpeechError;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// A recognized utterance
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// The recognized text
    pub text: String,
    /// Recognition confidence (0.0 - 1.0)
    pub confidence: f32,
    /// Whether the recognizer has committed to this text
    pub is_final: bool,
}

impl Transcript {
    /// Create a final transcript
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
            is_final: true,
        }
    }

    /// Mark as interim (not final)
    pub fn interim(mut self) -> Self {
        self.is_final = false;
        self
    }
}

/// Events delivered by a speech source between start and stop.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    Transcript(Transcript),
    /// Runtime failure reported by the recognizer
    Error(String),
    /// The recognizer finished on its own
    End,
}

/// An external speech-to-text capability.
pub trait SpeechRecognizer: Send {
    fn is_available(&self) -> bool;

    /// Begin delivering events. Fails with [`SpeechError::Unavailable`] when
    /// the capability is missing.
    fn start(&mut self) -> Result<ListeningSession, SpeechError>;
}

type StopHook = Box<dyn FnOnce() + Send>;

/// An active recognition session. Stopping or dropping it releases the
/// recognizer.
pub struct ListeningSession {
    events: UnboundedReceiver<SpeechEvent>,
    on_stop: Option<StopHook>,
}

impl ListeningSession {
    pub fn new(
        events: UnboundedReceiver<SpeechEvent>,
        on_stop: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            events,
            on_stop: Some(Box::new(on_stop)),
        }
    }

    /// Next event; a closed stream is reported as [`SpeechEvent::End`].
    pub async fn next_event(&mut self) -> SpeechEvent {
        self.events.recv().await.unwrap_or(SpeechEvent::End)
    }

    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(on_stop) = self.on_stop.take() {
            on_stop();
            self.events.close();
        }
    }
}

impl Drop for ListeningSession {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ListeningSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListeningSession")
            .field("active", &self.on_stop.is_some())
            .finish()
    }
}

type SharedSender = Arc<Mutex<Option<UnboundedSender<SpeechEvent>>>>;

/// In-process speech source. Producers push events through a [`SpeechFeed`];
/// pushes only land while a session is active.
#[derive(Debug)]
pub struct ChannelRecognizer {
    available: bool,
    sender: SharedSender,
}

impl ChannelRecognizer {
    pub fn new(available: bool) -> Self {
        Self {
            available,
            sender: Arc::new(Mutex::new(None)),
        }
    }

    /// Producer handle for this recognizer.
    pub fn feed(&self) -> SpeechFeed {
        SpeechFeed {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl SpeechRecognizer for ChannelRecognizer {
    fn is_available(&self) -> bool {
        self.available
    }

    fn start(&mut self) -> Result<ListeningSession, SpeechError> {
        if !self.available {
            return Err(SpeechError::Unavailable);
        }
        let (tx, rx) = unbounded_channel();
        *lock(&self.sender) = Some(tx);
        debug!("channel recognizer started");

        let sender = Arc::clone(&self.sender);
        Ok(ListeningSession::new(rx, move || {
            lock(&sender).take();
            debug!("channel recognizer stopped");
        }))
    }
}

/// Cloneable producer side of a [`ChannelRecognizer`].
#[derive(Debug, Clone)]
pub struct SpeechFeed {
    sender: SharedSender,
}

impl SpeechFeed {
    /// Deliver an event. Returns false when no session is listening.
    pub fn push(&self, event: SpeechEvent) -> bool {
        match lock(&self.sender).as_ref() {
            Some(tx) => tx.send(event).is_ok(),
            None => false,
        }
    }

    pub fn transcript(&self, text: impl Into<String>) -> bool {
        self.push(SpeechEvent::Transcript(Transcript::new(text, 1.0)))
    }

    pub fn is_listening(&self) -> bool {
        lock(&self.sender).is_some()
    }
}

fn lock(sender: &SharedSender) -> std::sync::MutexGuard<'_, Option<UnboundedSender<SpeechEvent>>> {
    // A panic while holding this lock cannot leave the slot half-written.
    sender.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
