//! REPL Module
//!
//! Interactive prompt that reads commands line by line and runs them
//! against the cached PokeAPI client.

pub mod catch;
pub mod commands;
pub mod input;
pub mod session;

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::PokeApiClient;
use crate::error::Result;

pub use commands::{Command, CommandInfo, Flow, COMMANDS};
pub use input::{spawn_line_reader, spawn_stdin_reader};
pub use session::Session;

/// Prompt printed before every input line
pub const PROMPT: &str = "Pokedex > ";

/// Normalizes a raw input line: trimmed, lower-cased, split on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// The interactive session: client, player state, and dice.
#[derive(Debug)]
pub struct Repl {
    client: PokeApiClient,
    session: Session,
    rng: StdRng,
}

impl Repl {
    /// Creates a REPL with an entropy-seeded RNG.
    pub fn new(client: PokeApiClient, session: Session) -> Self {
        Self::with_rng(client, session, StdRng::from_entropy())
    }

    /// Creates a REPL with a caller-provided RNG, for reproducible catches.
    pub fn with_rng(client: PokeApiClient, session: Session, rng: StdRng) -> Self {
        Self {
            client,
            session,
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Parses and runs one input line.
    ///
    /// Command errors are written to `out` and do not stop the REPL.
    pub async fn handle_line<W: Write + ?Sized>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = clean_input(line);
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let outcome = match Command::parse(&words) {
            Ok(command) => {
                commands::execute(command, &self.client, &mut self.session, &mut self.rng, out)
                    .await
            }
            Err(err) => Err(err),
        };

        match outcome {
            Ok(flow) => Ok(flow),
            Err(err) => {
                debug!(error = %err, input = line.trim(), "Command failed");
                writeln!(out, "{}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Reads lines from `input` until `exit` or end of input.
    pub async fn run<I, W>(&mut self, input: I, out: &mut W) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        W: Write + ?Sized,
    {
        let mut lines = input.lines();

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                info!("End of input, leaving REPL");
                break;
            };

            if self.handle_line(&line, out).await? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Reads lines from a channel until `exit` or until every sender is gone.
    ///
    /// Waiting on the channel is cancel-safe, so this future can be dropped
    /// mid-prompt (for example when a shutdown signal wins a `select!`).
    pub async fn run_channel<W>(&mut self, lines: &mut mpsc::Receiver<String>, out: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.recv().await else {
                writeln!(out)?;
                info!("End of input, leaving REPL");
                break;
            };

            if self.handle_line(&line, out).await? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::cache::ExpiringCache;

    fn offline_repl() -> Repl {
        // Nothing listens here; these tests never reach the network
        let cache = ExpiringCache::new(Duration::from_secs(60)).unwrap();
        let client = PokeApiClient::new("http://127.0.0.1:9", cache, Duration::from_secs(1)).unwrap();
        Repl::with_rng(client, Session::new("canalave-city-area"), StdRng::seed_from_u64(1))
    }

    #[tokio::test]
    async fn test_run_channel_until_senders_dropped() {
        let mut repl = offline_repl();
        let (tx, mut rx) = mpsc::channel(4);
        tx.send("pokedex".to_string()).await.unwrap();
        drop(tx);

        let mut out = Vec::new();
        repl.run_channel(&mut rx, &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "Pokedex > Your pokedex is empty\nPokedex > \n");
    }

    #[tokio::test]
    async fn test_run_channel_stops_on_exit() {
        let mut repl = offline_repl();
        let (tx, mut rx) = mpsc::channel(4);
        tx.send("exit".to_string()).await.unwrap();
        tx.send("pokedex".to_string()).await.unwrap();

        let mut out = Vec::new();
        repl.run_channel(&mut rx, &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.ends_with("Closing the Pokedex... Goodbye!\n"));
        assert_eq!(rx.recv().await.as_deref(), Some("pokedex"), "Lines after exit stay unread");
    }

    #[tokio::test]
    async fn test_waiting_prompt_can_be_cancelled() {
        let mut repl = offline_repl();
        // Sender kept alive: the REPL waits for input that never comes
        let (_tx, mut rx) = mpsc::channel::<String>(1);
        let mut out = Vec::new();

        let shutdown = tokio::time::sleep(Duration::from_millis(50));
        tokio::select! {
            _ = repl.run_channel(&mut rx, &mut out) => panic!("REPL should still be waiting"),
            _ = shutdown => {}
        }

        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
        repl.client().shutdown().await;
    }

    #[test]
    fn test_clean_input() {
        let cases = [
            (" hello  world  ", vec!["hello", "world"]),
            ("   multiple    spaces   here   ", vec!["multiple", "spaces", "here"]),
            ("Charmander Bulbasaur PIKACHU", vec!["charmander", "bulbasaur", "pikachu"]),
            ("", vec![]),
            ("   ", vec![]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {:?}", input);
        }
    }
}
