use std::time::Duration;

use anyhow::Result;
use marquee_progress::ProgressLine;

/// Shows how log output and the progress line share the terminal.
///
/// Log events are expected to reach `line` through a `tracing` subscriber
/// writing to [`ProgressLine::writer`].
pub async fn run_demo(line: &ProgressLine, pause: Duration) -> Result<()> {
    line.update_progress("Status 1").await?;
    tracing::info!("Log Output");
    // "Status 1" comes back below the log line once output settles
    tokio::time::sleep(pause).await;

    line.write_ordinary("WriteString without LF").await?;
    // Starts on a fresh line since the cursor was left mid-line
    line.update_progress("Status 2").await?;
    tokio::time::sleep(pause).await;

    line.update_progress("Status 3").await?;
    tokio::time::sleep(pause).await;

    line.clear_progress().await?;
    Ok(())
}
