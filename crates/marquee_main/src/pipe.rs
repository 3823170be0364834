use std::time::Duration;

use anyhow::Result;
use marquee_progress::ProgressLine;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{Instant, MissedTickBehavior};

use crate::Stopwatch;

#[derive(Debug, Clone)]
pub struct PipeOptions {
    pub label: String,
    /// How often the counter is refreshed.
    pub interval: Duration,
    /// Refreshes are skipped until input has been idle this long; matches
    /// the progress line's debounce delay.
    pub quiet: Duration,
}

/// Copies `input` line by line as ordinary output while the progress line
/// counts them. Returns the number of lines copied.
///
/// Lines are forwarded as raw bytes. The counter is only redrawn on a tick
/// when no line arrived within `quiet`, so a burst of input is not
/// interleaved with redraws. When the progress line comes back after a burst
/// it shows the count from the last refresh until the next tick.
///
/// The progress line is cleared on every exit, including read errors.
pub async fn run_pipe<R>(line: &ProgressLine, input: R, options: PipeOptions) -> Result<u64>
where
    R: AsyncBufRead + Unpin,
{
    let copied = copy_lines(line, input, &options).await;
    line.clear_progress().await?;
    copied
}

async fn copy_lines<R>(line: &ProgressLine, mut input: R, options: &PipeOptions) -> Result<u64>
where
    R: AsyncBufRead + Unpin,
{
    let mut ticker = tokio::time::interval(options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let stopwatch = Stopwatch::start();
    let mut buf = Vec::new();
    let mut last_line: Option<Instant> = None;
    let mut count = 0u64;

    loop {
        tokio::select! {
            biased;
            // `read_until` keeps partial input in `buf` when the tick wins.
            read = input.read_until(b'\n', &mut buf) => {
                if read? == 0 {
                    return Ok(count);
                }
                line.write_ordinary(std::mem::take(&mut buf)).await?;
                last_line = Some(Instant::now());
                count += 1;
            }
            _ = ticker.tick() => {
                if last_line.is_some_and(|at| at.elapsed() < options.quiet) {
                    continue;
                }
                line.update_progress(format!("{}: {count} lines ({stopwatch})", options.label))
                    .await?;
            }
        }
    }
}
