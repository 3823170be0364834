use std::time::Duration;

use marquee_domain::{ProgressText, TerminalSink};
use tokio::sync::{mpsc, oneshot};

use crate::state::{OutputState, TimerCommand};
use crate::timer::DebounceTimer;

/// Work submitted by a [`ProgressLine`](crate::ProgressLine) handle.
#[derive(Debug)]
pub(crate) enum Request {
    /// Replace the progress line; empty text clears it.
    Progress(ProgressText),
    /// Append ordinary output.
    Ordinary(Vec<u8>),
}

/// A request plus the signal its submitter waits on.
#[derive(Debug)]
pub(crate) struct Job {
    pub request: Request,
    pub done: oneshot::Sender<()>,
}

enum Event {
    Job(Job),
    Restore,
}

/// Single writer for the terminal.
///
/// Requests and debounce deadlines are applied one at a time in the order
/// they are observed. The actor never emits `tracing` events: a subscriber
/// may be writing through it, and logging here would wait on itself.
pub(crate) struct Actor<S> {
    sink: S,
    inbox: mpsc::Receiver<Job>,
    state: OutputState,
    delay: Duration,
    frame: Vec<u8>,
}

impl<S: TerminalSink> Actor<S> {
    pub fn new(sink: S, inbox: mpsc::Receiver<Job>, delay: Duration) -> Self {
        Self { sink, inbox, state: OutputState::default(), delay, frame: Vec::new() }
    }

    /// Runs until every handle has been dropped.
    pub async fn run(mut self) {
        let mut timer = DebounceTimer::new(self.delay);
        loop {
            let event = tokio::select! {
                job = self.inbox.recv() => match job {
                    Some(job) => Event::Job(job),
                    None => return,
                },
                () = timer.fired(), if timer.is_armed() => Event::Restore,
            };

            match event {
                Event::Job(Job { request, done }) => {
                    let command = match request {
                        Request::Progress(text) => self.state.update_progress(text, &mut self.frame),
                        Request::Ordinary(text) => self.state.write_ordinary(&text, &mut self.frame),
                    };
                    match command {
                        TimerCommand::Keep => {}
                        TimerCommand::Arm => timer.arm(),
                        TimerCommand::Disarm => timer.disarm(),
                    }
                    self.render();
                    // The submitter may have given up waiting; nothing to report.
                    let _ = done.send(());
                }
                Event::Restore => {
                    self.state.restore(&mut self.frame);
                    self.render();
                }
            }
        }
    }

    /// Writes the pending frame, best-effort.
    fn render(&mut self) {
        if self.frame.is_empty() {
            return;
        }
        let _ = self.sink.write(&self.frame);
        let _ = self.sink.flush();
        self.frame.clear();
    }
}
