use std::error;
use std::fmt;
use std::io;

use numutil::LiteralError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The hard-coded tables disagree with each other.
    DataMismatch { mnemonics: usize, entries: usize },
    UnknownMnemonic(String),
    UnknownOpcode(i64),
    Literal(LiteralError),
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DataMismatch { mnemonics, entries } => write!(
                f,
                "opcode data mismatch: {} mnemonics, {} entries",
                mnemonics, entries
            ),
            Error::UnknownMnemonic(name) => write!(f, "unknown mnemonic '{}'", name),
            Error::UnknownOpcode(op) => write!(f, "unknown opcode {}", op),
            Error::Literal(e) => write!(f, "{}", e),
            Error::Json(e) => write!(f, "json error: {}", e),
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Literal(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LiteralError> for Error {
    fn from(e: LiteralError) -> Self {
        Error::Literal(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
