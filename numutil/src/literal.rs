///
/// Numeric literal recognition
///
/// A token is a literal when it contains a `0x` (hex) or `0b` (binary)
/// prefix, or when it is made only of decimal digits. Anything else,
/// including negative numbers such as `-5`, is not a literal.
///

use std::error;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Radix {
    Bin,
    Dec,
    Hex,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Bin => 2,
            Radix::Dec => 10,
            Radix::Hex => 16,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Bin => "0b",
            Radix::Dec => "",
            Radix::Hex => "0x",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Radix::Bin => write!(f, "binary"),
            Radix::Dec => write!(f, "decimal"),
            Radix::Hex => write!(f, "hex"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LiteralError {
    NotALiteral(String),
    BadDigits(String, Radix),
    OutOfRange(String),
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LiteralError::NotALiteral(t) => write!(f, "'{}' is not a number", t),
            LiteralError::BadDigits(t, radix) => write!(f, "bad {} literal '{}'", radix, t),
            LiteralError::OutOfRange(t) => write!(f, "literal '{}' is out of range", t),
        }
    }
}

impl error::Error for LiteralError {}

/// Work out which kind of literal `token` is, if any. Decimal literals may
/// carry leading zeros, so `007` is decimal 7.
pub fn classify(token: &str) -> Option<Radix> {
    if token.contains("0x") {
        Some(Radix::Hex)
    } else if token.contains("0b") {
        Some(Radix::Bin)
    } else if !token.is_empty() && token.bytes().all(|c| c.is_ascii_digit()) {
        Some(Radix::Dec)
    } else {
        None
    }
}

/// Parse `token` as a literal of the given radix. Prefixed radixes must
/// start with their prefix, and at least one digit has to follow it.
pub fn parse_as(token: &str, radix: Radix) -> Result<i64, LiteralError> {
    let digits = token
        .strip_prefix(radix.prefix())
        .ok_or_else(|| LiteralError::BadDigits(token.to_string(), radix))?;

    // from_str_radix would happily take a sign, so check the digits first.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix.base())) {
        return Err(LiteralError::BadDigits(token.to_string(), radix));
    }

    i64::from_str_radix(digits, radix.base())
        .map_err(|_| LiteralError::OutOfRange(token.to_string()))
}

pub fn parse(token: &str) -> Result<i64, LiteralError> {
    match classify(token) {
        Some(radix) => parse_as(token, radix),
        None => Err(LiteralError::NotALiteral(token.to_string())),
    }
}
