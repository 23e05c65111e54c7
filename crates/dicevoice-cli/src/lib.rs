//! Terminal front end for the dicevoice score keeper.
//!
//! Lines read from stdin are forwarded to a backend worker that owns the
//! [`ScoreKeeper`](dicevoice_core::ScoreKeeper); the worker answers with
//! events that are rendered to stdout.

pub mod backend;
pub mod command;
pub mod formatting;
pub mod logging;

use anyhow::{Context, Result};
use backend::{spawn_backend, BackendEvent, BackendRequest};
use dicevoice_config::AppConfig;
use dicevoice_core::{ChannelRecognizer, ScoreKeeper};
use tokio::io::{AsyncBufReadExt, BufReader};

pub use command::{parse_command, Command};
pub use formatting::render_sheet;
pub use logging::init_tracing;

/// Build a score keeper from configuration and run the interactive loop
/// until `/quit` or end of input.
pub async fn run_repl(config: &AppConfig) -> Result<()> {
    let recognizer = ChannelRecognizer::new(config.speech.enabled);
    let feed = recognizer.feed();
    let keeper = ScoreKeeper::from_config(config, Box::new(recognizer))
        .context("invalid vocabulary configuration")?;

    let mut backend = spawn_backend(keeper, feed);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                let submitted = match line.context("failed to read stdin")? {
                    Some(line) => line,
                    None => {
                        stdin_open = false;
                        "/quit".to_string()
                    }
                };
                if backend.request_tx.send(BackendRequest::Submit(submitted)).is_err() {
                    break;
                }
            }
            event = backend.event_rx.recv() => {
                match event {
                    Some(BackendEvent::Quit) | None => break,
                    Some(event) => print_event(&event),
                }
            }
        }
    }

    Ok(())
}

fn print_event(event: &BackendEvent) {
    match event {
        BackendEvent::Initialized { sheet, status } | BackendEvent::Updated { sheet, status } => {
            print!("{}", render_sheet(sheet));
            println!("{}", status);
        }
        BackendEvent::Notice { message } => println!("{}", message),
        BackendEvent::Error { context, message } => {
            eprintln!("Error while handling '{}': {}", context, message);
        }
        BackendEvent::Quit => {}
    }
}
