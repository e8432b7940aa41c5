//! Line input
//!
//! Blocking line reader on its own OS thread, feeding the REPL through a channel.
//!
//! The thread is detached: it never holds a runtime worker, so shutting the
//! runtime down is not delayed by a read that is still waiting for input.

use std::io::BufRead;
use std::thread;

use tokio::sync::mpsc;
use tracing::debug;

/// Spawns a thread that reads `reader` line by line into a channel.
///
/// The channel closes on end of input, on a read error, or once the
/// receiver is dropped.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);

    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    debug!(error = %err, "Input read failed");
                    break;
                }
            };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
        debug!("Input reader finished");
    });

    rx
}

/// Line reader over the process's standard input.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    spawn_line_reader(std::io::BufReader::new(std::io::stdin()))
}
