mod actor;
mod config;
mod line;
mod state;
mod timer;
mod writer;

pub use config::*;
pub use line::*;
pub use writer::*;
