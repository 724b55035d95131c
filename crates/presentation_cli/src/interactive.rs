//! Line-oriented interactive session
//!
//! Attempts run as background tasks so a new command can supersede one
//! still in flight. A watcher task prints every applied transition.

use std::sync::Arc;

use application::LocationResolver;
use domain::LocationMode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::render::render_state;

const HELP: &str = "Commands: gps | pin <code> | mode <gps|pin> | state | help | quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Gps,
    Pin(String),
    Mode(LocationMode),
    State,
    Help,
    Quit,
}

/// Parse an input line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>, String> {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim()));

    let command = match head.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "gps" => ReplCommand::Gps,
        "pin" => ReplCommand::Pin(rest.to_string()),
        "mode" => ReplCommand::Mode(rest.parse().map_err(|e: domain::DomainError| e.to_string())?),
        "state" => ReplCommand::State,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => return Err(format!("Unknown command '{other}'. {HELP}")),
    };
    Ok(Some(command))
}

/// Run the session until `quit` or end of input
pub async fn run(resolver: Arc<LocationResolver>, json: bool) -> anyhow::Result<()> {
    let mut rx = resolver.subscribe();
    let watcher = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            println!("{}", render_state(&state, json));
        }
    });

    println!("{} [{}]", HELP, resolver.mode().label());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            },
        };
        debug!(?command, "Interactive command");

        match command {
            ReplCommand::Gps => {
                let resolver = Arc::clone(&resolver);
                tokio::spawn(async move { resolver.start_gps_resolution().await });
            },
            ReplCommand::Pin(raw) => {
                let resolver = Arc::clone(&resolver);
                tokio::spawn(async move { resolver.start_pin_resolution(&raw).await });
            },
            ReplCommand::Mode(mode) => {
                resolver.switch_mode(mode);
                println!("Mode: {}", mode.label());
            },
            ReplCommand::State => println!("{}", render_state(&resolver.state(), json)),
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Quit => break,
        }
    }

    watcher.abort();
    Ok(())
}
