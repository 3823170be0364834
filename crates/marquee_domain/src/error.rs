use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Progress text must fit on a single line: {0:?}")]
    MultilineProgress(String),

    #[error("Progress line actor has shut down")]
    ActorClosed,

    #[error("Failed to start progress line runtime: {0}")]
    Runtime(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
