use crate::command::{parse_command, Command, HELP_TEXT};
use dicevoice_core::{ScoreKeeper, ScoreSheet, SpeechFeed, SpeechOutcome};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Requests sent from the front end to the backend worker.
#[derive(Debug)]
pub enum BackendRequest {
    Submit(String),
}

/// Events emitted by the backend worker to drive the front end.
#[derive(Debug)]
pub enum BackendEvent {
    Initialized {
        sheet: ScoreSheet,
        status: String,
    },
    Updated {
        sheet: ScoreSheet,
        status: String,
    },
    Notice {
        message: String,
    },
    Error {
        context: String,
        message: String,
    },
    Quit,
}

/// Handle containing the channels used by the front end to talk to the backend worker.
pub struct BackendHandle {
    pub request_tx: UnboundedSender<BackendRequest>,
    pub event_rx: UnboundedReceiver<BackendEvent>,
}

/// Spawn the backend worker that owns the score keeper. `feed` is the
/// producer side of the keeper's speech source; while listening, typed
/// transcripts are routed through it instead of being applied directly.
pub fn spawn_backend(keeper: ScoreKeeper, feed: SpeechFeed) -> BackendHandle {
    let (request_tx, mut request_rx) = unbounded_channel();
    let (event_tx, event_rx) = unbounded_channel();

    tokio::spawn(async move {
        run_backend_loop(keeper, feed, &mut request_rx, &event_tx).await;
    });

    BackendHandle {
        request_tx,
        event_rx,
    }
}

async fn run_backend_loop(
    mut keeper: ScoreKeeper,
    feed: SpeechFeed,
    request_rx: &mut UnboundedReceiver<BackendRequest>,
    event_tx: &UnboundedSender<BackendEvent>,
) {
    let _ = event_tx.send(BackendEvent::Initialized {
        sheet: keeper.sheet(),
        status: "Status: awaiting input".to_string(),
    });

    loop {
        tokio::select! {
            request = request_rx.recv() => {
                let Some(BackendRequest::Submit(input)) = request else {
                    break;
                };
                if !handle_submit(&mut keeper, &feed, &input, event_tx) {
                    let _ = event_tx.send(BackendEvent::Quit);
                    break;
                }
            }
            event = keeper.next_speech_event() => {
                let outcome = keeper.handle_speech_event(event);
                if outcome != SpeechOutcome::Ignored {
                    let _ = event_tx.send(BackendEvent::Updated {
                        sheet: keeper.sheet(),
                        status: status_message_for_outcome(&outcome),
                    });
                }
            }
        }
    }

    keeper.stop_listening();
    debug!("backend loop finished");
}

/// Apply one line of input. Returns false when the front end asked to quit.
fn handle_submit(
    keeper: &mut ScoreKeeper,
    feed: &SpeechFeed,
    input: &str,
    event_tx: &UnboundedSender<BackendEvent>,
) -> bool {
    let command = parse_command(input);
    let status = status_message_for_command(&command);

    let result: Result<(), String> = match &command {
        Command::Empty => return true,
        Command::Quit => return false,
        Command::Help => {
            let _ = event_tx.send(BackendEvent::Notice {
                message: HELP_TEXT.to_string(),
            });
            return true;
        }
        Command::Unknown(name) => Err(format!("Unknown command '/{}' (try /help)", name)),
        Command::AddPlayer(name) => keeper.add_player(name).map_err(|err| err.to_string()),
        Command::Undo => {
            if !keeper.undo() {
                let _ = event_tx.send(BackendEvent::Notice {
                    message: "Nothing to undo".to_string(),
                });
                return true;
            }
            Ok(())
        }
        Command::Redo => {
            if !keeper.redo() {
                let _ = event_tx.send(BackendEvent::Notice {
                    message: "Nothing to redo".to_string(),
                });
                return true;
            }
            Ok(())
        }
        Command::ResetScores => {
            keeper.reset_scores();
            Ok(())
        }
        Command::NewGame => {
            keeper.new_game();
            Ok(())
        }
        Command::Table => Ok(()),
        Command::ListenStart => keeper.start_listening().map_err(|err| err.to_string()),
        Command::ListenStop => {
            keeper.stop_listening();
            Ok(())
        }
        Command::Transcript(text) => {
            if keeper.is_listening() && feed.transcript(text.as_str()) {
                // delivered back through the speech source
                return true;
            }
            let status = match keeper.apply_command(text) {
                Some(resolved) => format!("Status: recorded '{}'", resolved),
                None => format!("Status: not recognized '{}'", text),
            };
            let _ = event_tx.send(BackendEvent::Updated {
                sheet: keeper.sheet(),
                status,
            });
            return true;
        }
    };

    let event = match result {
        Ok(()) => BackendEvent::Updated {
            sheet: keeper.sheet(),
            status,
        },
        Err(message) => BackendEvent::Error {
            context: input.trim().to_string(),
            message,
        },
    };
    let _ = event_tx.send(event);
    true
}

fn status_message_for_command(command: &Command) -> String {
    match command {
        Command::Empty => "Status: awaiting input".to_string(),
        Command::Help => "Status: showing help".to_string(),
        Command::Quit => "Status: exiting".to_string(),
        Command::AddPlayer(name) => format!("Status: added player '{}'", name),
        Command::Undo => "Status: undid last change".to_string(),
        Command::Redo => "Status: redid last change".to_string(),
        Command::ResetScores => "Status: scores cleared".to_string(),
        Command::NewGame => "Status: new game started".to_string(),
        Command::Table => "Status: showing score sheet".to_string(),
        Command::ListenStart => "Status: listening for commands".to_string(),
        Command::ListenStop => "Status: listening stopped".to_string(),
        Command::Unknown(name) => format!("Status: unknown command '/{}'", name),
        Command::Transcript(text) => format!("Status: interpreting '{}'", text),
    }
}

fn status_message_for_outcome(outcome: &SpeechOutcome) -> String {
    match outcome {
        SpeechOutcome::Applied(command) => format!("Status: heard and recorded '{}'", command),
        SpeechOutcome::Unresolved(text) => format!("Status: heard '{}' (not recognized)", text),
        SpeechOutcome::Ignored => "Status: listening for commands".to_string(),
        SpeechOutcome::Ended => "Status: speech source ended, listening stopped".to_string(),
        SpeechOutcome::Failed(err) => format!("Status: {}; listening stopped", err),
    }
}
