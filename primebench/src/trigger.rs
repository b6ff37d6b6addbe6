use std::{io::BufRead, sync::mpsc, thread};

use primebench_harness::TriggerSource;

/// Trigger source fed by lines on stdin.
///
/// A reader thread forwards one event per line over a channel; sampling
/// drains at most one event at a time, so queued lines surface as discrete
/// events on successive samples. Reading whole lines is what debounces the
/// input: a held key yields one event per newline, not a stream of level
/// samples. The source reports exhaustion once stdin reaches EOF and the
/// queue is drained.
pub struct StdinTrigger {
    events: mpsc::Receiver<()>,
}

impl StdinTrigger {
    /// Spawn the reader thread and return the sampled side of the source.
    pub fn spawn() -> Self {
        let (sender, events) = mpsc::channel();
        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                if line.is_err() || sender.send(()).is_err() {
                    break;
                }
            }
        });
        Self { events }
    }
}

impl TriggerSource for StdinTrigger {
    fn sample(&mut self) -> Option<bool> {
        match self.events.try_recv() {
            Ok(()) => Some(true),
            Err(mpsc::TryRecvError::Empty) => Some(false),
            Err(mpsc::TryRecvError::Disconnected) => None,
        }
    }
}
