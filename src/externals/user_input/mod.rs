use std::{
    io::{self, BufRead},
    thread,
};

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::trace;

pub mod task;
pub mod trigger;

/// Lines typed on stdin. Reading happens on a plain thread so a pending read
/// never holds up runtime shutdown; the thread ends with the process.
pub fn stdin_lines() -> ReceiverStream<io::Result<String>> {
    let (tx, rx) = mpsc::channel(16);
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.blocking_send(line).is_err() {
                trace!("Input receiver dropped.");
                break;
            }
        }
    });
    ReceiverStream::new(rx)
}
