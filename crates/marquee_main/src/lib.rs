mod cli;
mod demo;
mod pipe;
mod stopwatch;

pub use cli::*;
pub use demo::run_demo;
pub use pipe::{PipeOptions, run_pipe};
pub use stopwatch::Stopwatch;
