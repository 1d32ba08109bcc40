//! Operator console.
//!
//! # Responsibilities
//! - Prompt on stdout and read commands line by line from stdin
//! - `itemsList`: re-stat the catalog file, then print the loaded catalog
//! - `stop`: announce shutdown and trigger the shutdown coordinator
//!
//! # Design Decisions
//! - Command recognition is a pure function over the trimmed line
//! - The loop always reprompts, including after a failed re-stat
//! - End of input ends the loop; the web server keeps serving
//! - The prompt and command output use stdout directly; logs go to stderr

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::catalog::Catalog;
use crate::lifecycle::Shutdown;

const PROMPT: &str = "Type itemsList or stop to shutdown the server: ";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the loaded catalog.
    Items,
    /// Shut the process down.
    Stop,
    /// Anything else, echoed back as invalid.
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// Surrounding whitespace is trimmed; no other normalization.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "stop" => Command::Stop,
            "itemsList" => Command::Items,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// The stdin command loop, independent of the request/response cycle.
pub struct OperatorConsole {
    catalog: Arc<Catalog>,
    catalog_path: PathBuf,
    shutdown: Arc<Shutdown>,
}

impl OperatorConsole {
    pub fn new(catalog: Arc<Catalog>, catalog_path: PathBuf, shutdown: Arc<Shutdown>) -> Self {
        Self {
            catalog,
            catalog_path,
            shutdown,
        }
    }

    /// Run the read loop until `stop` or end of input.
    pub async fn run(self) {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            prompt();
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    tracing::debug!("Console input closed");
                    return;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Console read failed");
                    return;
                }
            };

            match Command::parse(&line) {
                Command::Stop => {
                    println!("Shutting down the server");
                    self.shutdown.trigger();
                    return;
                }
                Command::Items => self.print_items().await,
                Command::Unknown(cmd) => println!("Invalid command: {cmd}"),
            }
        }
    }

    /// Re-stat the catalog file, then print the in-memory catalog.
    ///
    /// The stat only detects whether the file vanished since load; the
    /// printed records are the frozen snapshot either way.
    async fn print_items(&self) {
        match tokio::fs::metadata(&self.catalog_path).await {
            Ok(_) => println!("{:#?}", self.catalog.records()),
            Err(e) => {
                tracing::error!(
                    path = %self.catalog_path.display(),
                    error = %e,
                    "Catalog file stat failed"
                );
            }
        }
    }
}

fn prompt() {
    print!("{PROMPT}");
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stop() {
        assert_eq!(Command::parse("stop"), Command::Stop);
        assert_eq!(Command::parse("  stop \n"), Command::Stop); // trimmed
    }

    #[test]
    fn test_parse_items_list() {
        assert_eq!(Command::parse("itemsList"), Command::Items);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            Command::parse("itemslist"),
            Command::Unknown("itemslist".to_string())
        );
        assert_eq!(Command::parse("STOP"), Command::Unknown("STOP".to_string()));
    }

    #[test]
    fn test_parse_unknown_keeps_trimmed_line() {
        assert_eq!(Command::parse(" xyz "), Command::Unknown("xyz".to_string()));
    }
}
