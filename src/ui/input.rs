//! Line input from stdin.
//!
//! A single reader thread owns stdin and forwards lines over a channel, so
//! prompts, alerts and the shell's event loop all read from the same source
//! and the shell can wait for input with a timeout (its clock tick).

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Mutex, OnceLock};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// stdin reached end of file.
    Closed,
    /// Nothing arrived before the timeout.
    Timeout,
}

static LINES: OnceLock<Mutex<Receiver<String>>> = OnceLock::new();

fn lines() -> &'static Mutex<Receiver<String>> {
    LINES.get_or_init(|| {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
            // dropping `tx` tells readers that stdin is closed
        });
        Mutex::new(rx)
    })
}

/// Block until a line arrives. `None` once stdin is closed.
pub fn read_line() -> Option<String> {
    let rx = lines().lock().ok()?;
    rx.recv().ok().map(|l| l.trim_end_matches('\r').to_string())
}

/// Wait at most `timeout` for a line.
pub fn next_input(timeout: Duration) -> Input {
    let Ok(rx) = lines().lock() else {
        return Input::Closed;
    };
    match rx.recv_timeout(timeout) {
        Ok(line) => Input::Line(line.trim_end_matches('\r').to_string()),
        Err(RecvTimeoutError::Timeout) => Input::Timeout,
        Err(RecvTimeoutError::Disconnected) => Input::Closed,
    }
}
