/// A line of front-end input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Help,
    Quit,
    AddPlayer(String),
    Undo,
    Redo,
    ResetScores,
    NewGame,
    Table,
    ListenStart,
    ListenStop,
    Unknown(String),
    /// Anything that is not a slash command is a spoken or typed score command
    Transcript(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  /add <name>   Add a player
  /undo         Undo the last change
  /redo         Redo the last undone change
  /reset        Clear all scores, keep players
  /new          Start a new game (removes players, not undoable)
  /table        Show the score sheet
  /listen       Start listening; following lines are treated as speech
  /stop         Stop listening
  /help         Show this help
  /quit         Exit
Anything else is a score command: <player> <combination> <points>, e.g. \"Дима каре 25\"";

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Transcript(trimmed.to_string());
    };

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };

    match name.to_lowercase().as_str() {
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "add" => Command::AddPlayer(argument.to_string()),
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "reset" => Command::ResetScores,
        "new" => Command::NewGame,
        "table" | "show" => Command::Table,
        "listen" => Command::ListenStart,
        "stop" => Command::ListenStop,
        _ => Command::Unknown(name.to_string()),
    }
}
