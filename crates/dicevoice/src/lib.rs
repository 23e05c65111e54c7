pub use dicevoice_cli::{backend, command, formatting, logging, run_repl};
pub use dicevoice_config::{config, AppConfig};
pub use dicevoice_core::{
    error, history, ledger, matcher, normalize, registry, resolver, session, sheet, speech,
    vocabulary,
};
