use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Output(_) => 1,
        }
    }

    /// The reader went away, e.g. `twig | head`.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Error::Output(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
