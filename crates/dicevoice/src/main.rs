//! dicevoice: keep dice-poker scores with spoken commands.
//!
//! Usage:
//!   dicevoice                                   # interactive score keeper
//!   dicevoice resolve -p Дима "Дима каре 25"     # resolve one command, print JSON
//!   dicevoice tokens "Фулл-хаус, 30!"           # show normalized tokens

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dicevoice_cli::{init_tracing, run_repl};
use dicevoice_config::AppConfig;
use dicevoice_core::{resolve, tokenize, PlayerRegistry, Vocabulary};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dicevoice", version, about = "Voice-driven dice poker score keeper")]
struct Cli {
    /// Configuration file (defaults to $DICEVOICE_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level, overrides the configured one (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Interactive score keeper reading commands from stdin
    Repl,
    /// Resolve a single command against a list of players and print the result as JSON
    Resolve {
        /// Registered player, in registration order (repeatable)
        #[arg(short, long = "player")]
        players: Vec<String>,
        /// The utterance to resolve
        text: String,
    },
    /// Print the normalized tokens of an utterance
    Tokens { text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level)?;

    match cli.command.unwrap_or(Mode::Repl) {
        Mode::Repl => run_repl(&config).await,
        Mode::Resolve { players, text } => resolve_once(&config, &players, &text),
        Mode::Tokens { text } => {
            println!("{}", serde_json::to_string(&tokenize(&text))?);
            Ok(())
        }
    }
}

fn resolve_once(config: &AppConfig, players: &[String], text: &str) -> Result<()> {
    let vocabulary =
        Vocabulary::from_config(&config.vocabulary).context("invalid vocabulary configuration")?;
    let mut registry = PlayerRegistry::new();
    for name in config.players.iter().chain(players) {
        if let Err(err) = registry.add(name) {
            tracing::warn!(player = %name, error = %err, "skipping player");
        }
    }

    let tokens = tokenize(text);
    let resolved = resolve(&tokens, &registry, &vocabulary);
    let output = serde_json::json!({
        "tokens": tokens,
        "resolved": resolved,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
