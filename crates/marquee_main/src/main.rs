use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use marquee_infra::StdTerminalSink;
use marquee_main::{Cli, Command, PipeOptions, run_demo, run_pipe};
use marquee_progress::ProgressLine;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The actor gets its own thread: log events are written from blocking
    // contexts inside this runtime.
    let line = ProgressLine::detached(StdTerminalSink::default(), cli.progress_config())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(line.writer())
        .with_target(false)
        .init();

    let quiet = cli.delay;
    match cli.command {
        Command::Demo => run_demo(&line, Duration::from_secs(1)).await?,
        Command::Pipe { label, interval } => {
            let input = BufReader::new(tokio::io::stdin());
            let lines = run_pipe(&line, input, PipeOptions { label, interval, quiet }).await?;
            tracing::debug!(lines, "Input finished");
        }
    }

    Ok(())
}
