//! Front-end Error Types

use derive_more::{Display, Error};

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration could not be loaded.
    #[display("configuration error")]
    Config,
    /// The catalog could not be loaded.
    #[display("catalog error")]
    Catalog,
    /// Reading commands or writing the screen failed.
    #[display("terminal I/O error")]
    Io,
    #[display("unknown command: {_0} (try `help`)")]
    UnknownCommand(#[error(not(source))] String),
    #[display("invalid argument: {_0}")]
    InvalidArgument(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownCommand(_) | Self::InvalidArgument(_))
    }
}
