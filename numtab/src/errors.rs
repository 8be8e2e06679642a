use std::error;
use std::fmt;
use std::io;

use numutil::LiteralError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    InvalidSelection(String),
    Literal(LiteralError),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSelection(key) => write!(f, "Invalid selection '{}'", key),
            Error::Literal(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl error::Error for Error {}

impl From<LiteralError> for Error {
    fn from(e: LiteralError) -> Self {
        Error::Literal(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
