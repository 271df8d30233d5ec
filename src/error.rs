use core::fmt;
use std::num::ParseIntError;

use crate::persistence::codec::CodecErr;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    InvalidId { input: String, source: ParseIntError },
    Codec(CodecErr),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { input, source } => {
                write!(f, "\"{}\" is not a valid CD id: {}", input, source)
            }
            Self::Codec(err) => write!(f, "Unable to decode inventory entry: {}", err),
            Self::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidId { source, .. } => Some(source),
            Self::Codec(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CodecErr> for Error {
    fn from(value: CodecErr) -> Self {
        Self::Codec(value)
    }
}

/// Parses a user-supplied CD id. Surrounding whitespace is ignored.
pub fn parse_id(input: &str) -> Result<i64> {
    input.trim().parse::<i64>().map_err(|source| Error::InvalidId {
        input: input.to_string(),
        source,
    })
}
