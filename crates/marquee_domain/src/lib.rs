mod control;
mod error;
mod progress_text;
mod sink;

pub use control::*;
pub use error::*;
pub use progress_text::*;
pub use sink::*;
