use std::time::Duration;

use clap::{Parser, Subcommand};
use marquee_progress::ProgressConfig;

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Quiet period after ordinary output before the progress line is drawn
    /// again, e.g. `200ms` or `1s`.
    #[arg(long, global = true, env = "MARQUEE_DELAY", default_value = "200ms", value_parser = humantime::parse_duration)]
    pub delay: Duration,

    /// Enable verbose logging output.
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Walk through log output interleaved with a progress line.
    Demo,

    /// Copy stdin to the terminal while showing a line counter.
    ///
    /// The counter is refreshed only once input pauses for `--delay`.
    Pipe {
        /// Label shown in front of the counter.
        #[arg(long, default_value = "Reading")]
        label: String,

        /// How often the counter is refreshed, e.g. `500ms`.
        #[arg(long, default_value = "500ms", value_parser = humantime::parse_duration)]
        interval: Duration,
    },
}

impl Cli {
    pub fn progress_config(&self) -> ProgressConfig {
        ProgressConfig::default().delay(self.delay)
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
