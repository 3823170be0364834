use std::thread;

use marquee_domain::{Error, ProgressText, Result, TerminalSink};
use tokio::sync::{mpsc, oneshot};

use crate::ProgressConfig;
use crate::actor::{Actor, Job, Request};
use crate::writer::ProgressWriter;

/// Handle to a terminal shared between ordinary output and one progress line.
///
/// Every operation returns once its effect has been written to the sink.
/// Calls from many tasks or threads are applied one at a time, in the order
/// they reach the actor. Exactly one `ProgressLine` should back a given
/// terminal stream; clone the handle to share it.
#[derive(Debug, Clone)]
pub struct ProgressLine {
    inbox: mpsc::Sender<Job>,
}

impl ProgressLine {
    /// Starts the actor as a task on the current tokio runtime.
    ///
    /// The blocking operations must not be called from a thread driving
    /// that runtime; use [`ProgressLine::detached`] for synchronous callers.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<S: TerminalSink + 'static>(sink: S, config: ProgressConfig) -> Self {
        let (line, actor) = Self::channel(sink, config);
        tokio::spawn(actor.run());
        tracing::debug!(delay = ?config.delay, "Progress line started");
        line
    }

    /// Starts the actor on a dedicated thread with its own runtime.
    ///
    /// The actor lives until every handle is dropped.
    pub fn detached<S: TerminalSink + 'static>(sink: S, config: ProgressConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(Error::Runtime)?;
        let (line, actor) = Self::channel(sink, config);
        thread::Builder::new()
            .name("marquee-progress".to_string())
            .spawn(move || runtime.block_on(actor.run()))
            .map_err(Error::Runtime)?;
        tracing::debug!(delay = ?config.delay, "Progress line started on dedicated thread");
        Ok(line)
    }

    fn channel<S: TerminalSink>(sink: S, config: ProgressConfig) -> (Self, Actor<S>) {
        // A single slot: a caller waits while the in-flight request drains.
        let (tx, rx) = mpsc::channel(1);
        (Self { inbox: tx }, Actor::new(sink, rx, config.delay))
    }

    /// Shows `text` as the progress line, replacing any previous one.
    /// Empty text clears it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultilineProgress`] if `text` contains a line
    /// terminator, or [`Error::ActorClosed`] if the actor has shut down.
    pub async fn update_progress(&self, text: impl Into<String>) -> Result<()> {
        let text = ProgressText::new(text)?;
        self.submit(Request::Progress(text)).await
    }

    /// Erases the progress line and stops tracking it.
    pub async fn clear_progress(&self) -> Result<()> {
        self.submit(Request::Progress(ProgressText::default())).await
    }

    /// Appends `text` above the progress line. The progress line is drawn
    /// again once no ordinary output arrived for the configured delay.
    pub async fn write_ordinary(&self, text: impl Into<Vec<u8>>) -> Result<()> {
        self.submit(Request::Ordinary(text.into())).await
    }

    /// Blocking form of [`ProgressLine::update_progress`].
    pub fn update_progress_blocking(&self, text: impl Into<String>) -> Result<()> {
        futures::executor::block_on(self.update_progress(text))
    }

    /// Blocking form of [`ProgressLine::clear_progress`].
    pub fn clear_progress_blocking(&self) -> Result<()> {
        futures::executor::block_on(self.clear_progress())
    }

    /// Blocking form of [`ProgressLine::write_ordinary`].
    pub fn write_ordinary_blocking(&self, text: impl Into<Vec<u8>>) -> Result<()> {
        futures::executor::block_on(self.write_ordinary(text))
    }

    /// Adapter for logging facilities that expect a writer.
    pub fn writer(&self) -> ProgressWriter {
        ProgressWriter::new(self.clone())
    }

    async fn submit(&self, request: Request) -> Result<()> {
        let (done, applied) = oneshot::channel();
        self.inbox
            .send(Job { request, done })
            .await
            .map_err(|_| Error::ActorClosed)?;
        applied.await.map_err(|_| Error::ActorClosed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use marquee_test_kit::{FailingSink, RecordingSink};
    use pretty_assertions::assert_eq;

    use super::*;

    const DELAY: Duration = Duration::from_millis(200);

    fn fixture_line() -> (ProgressLine, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let line = ProgressLine::spawn(sink.clone(), ProgressConfig::default().delay(DELAY));
        (line, sink)
    }

    async fn quiet_period() {
        tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_is_restored_below_log_output() {
        let (line, sink) = fixture_line();

        line.update_progress("Status 1").await.unwrap();
        assert_eq!(sink.contents(), "Status 1");

        line.write_ordinary("Log Output\n").await.unwrap();
        assert_eq!(sink.contents(), "Status 1\r\x1b[KLog Output\n");

        quiet_period().await;

        let actual = sink.contents();
        let expected = "Status 1\r\x1b[KLog Output\nStatus 1";
        assert_eq!(actual, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_is_not_restored_before_delay() {
        let (line, sink) = fixture_line();

        line.update_progress("P").await.unwrap();
        line.write_ordinary("L\n").await.unwrap();
        tokio::time::sleep(DELAY / 2).await;

        let actual = sink.contents();
        let expected = "P\r\x1b[KL\n";
        assert_eq!(actual, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_restores_progress_once() {
        let (line, sink) = fixture_line();

        line.update_progress("[working]").await.unwrap();
        for i in 0..5 {
            line.write_ordinary(format!("line {i}\n")).await.unwrap();
            tokio::time::sleep(DELAY / 4).await;
        }
        assert_eq!(sink.count("[working]"), 1);

        quiet_period().await;
        quiet_period().await;

        assert_eq!(sink.count("[working]"), 2);
        assert!(sink.contents().ends_with("line 4\n[working]"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_inline_write_then_progress_starts_new_line() {
        let (line, sink) = fixture_line();

        line.write_ordinary("WriteString without LF").await.unwrap();
        line.update_progress("Status 2").await.unwrap();
        line.update_progress("Status 3").await.unwrap();
        line.clear_progress().await.unwrap();

        let actual = sink.contents();
        let expected = "WriteString without LF\nStatus 2\r\x1b[KStatus 3\r\x1b[K";
        assert_eq!(actual, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_after_inline_write_starts_new_line() {
        let (line, sink) = fixture_line();

        line.update_progress("P").await.unwrap();
        line.write_ordinary("abc").await.unwrap();
        quiet_period().await;

        let actual = sink.contents();
        let expected = "P\r\x1b[Kabc\nP";
        assert_eq!(actual, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_without_progress_writes_nothing() {
        let (line, sink) = fixture_line();

        line.clear_progress().await.unwrap();
        line.clear_progress().await.unwrap();

        assert_eq!(sink.contents(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_pending_restore() {
        let (line, sink) = fixture_line();

        line.update_progress("P").await.unwrap();
        line.write_ordinary("L\n").await.unwrap();
        line.clear_progress().await.unwrap();
        quiet_period().await;

        let actual = sink.contents();
        let expected = "P\r\x1b[KL\n";
        assert_eq!(actual, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_update_cancels_pending_restore() {
        let (line, sink) = fixture_line();

        line.update_progress("old").await.unwrap();
        line.write_ordinary("L\n").await.unwrap();
        line.update_progress("new").await.unwrap();
        quiet_period().await;

        let actual = sink.contents();
        let expected = "old\r\x1b[KL\nnew";
        assert_eq!(actual, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_multiline_progress_is_rejected() {
        let (line, sink) = fixture_line();

        line.update_progress("Status 1").await.unwrap();
        let actual = line.update_progress("first\nsecond").await;

        assert!(matches!(actual, Err(Error::MultilineProgress(_))));
        assert_eq!(sink.contents(), "Status 1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_is_flushed_per_render() {
        let (line, sink) = fixture_line();

        line.update_progress("P").await.unwrap();
        line.write_ordinary("L\n").await.unwrap();
        line.write_ordinary("").await.unwrap();

        assert_eq!(sink.flushes(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_sink_is_not_reported() {
        let line = ProgressLine::spawn(FailingSink, ProgressConfig::default());

        line.update_progress("P").await.unwrap();
        line.write_ordinary("L\n").await.unwrap();
        line.clear_progress().await.unwrap();
    }

    #[test]
    fn test_operations_fail_once_actor_is_gone() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let line = runtime.block_on(async {
            ProgressLine::spawn(RecordingSink::default(), ProgressConfig::default())
        });
        drop(runtime);

        let actual = line.write_ordinary_blocking("L\n");
        assert!(matches!(actual, Err(Error::ActorClosed)));

        let actual = line.update_progress_blocking("P");
        assert!(matches!(actual, Err(Error::ActorClosed)));
    }

    #[test]
    fn test_detached_line_serves_blocking_callers() {
        let sink = Arc::new(RecordingSink::default());
        let line = ProgressLine::detached(
            sink.clone(),
            ProgressConfig::default().delay(Duration::from_millis(20)),
        )
        .unwrap();

        line.update_progress_blocking("Status 1").unwrap();
        line.write_ordinary_blocking("Log Output\n").unwrap();
        std::thread::sleep(Duration::from_millis(200));

        let actual = sink.contents();
        let expected = "Status 1\r\x1b[KLog Output\nStatus 1";
        assert_eq!(actual, expected);

        line.clear_progress_blocking().unwrap();
        assert!(sink.contents().ends_with("Status 1\r\x1b[K"));
    }
}
