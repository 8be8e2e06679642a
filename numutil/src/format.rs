use crate::literal::{self, LiteralError};

bitflags! {
    pub struct Bases: u8 {
        const DEC = 0b001;
        const HEX = 0b010;
        const BIN = 0b100;
        const ALL = 0b111;
    }
}

fn sign(v: i64) -> &'static str {
    if v < 0 {
        "-"
    } else {
        ""
    }
}

/// `0x` and at least two upper case digits, e.g. `0x0A`.
pub fn hex(v: i64) -> String {
    format!("{}0x{:02X}", sign(v), v.unsigned_abs())
}

pub fn bin(v: i64) -> String {
    format!("{}0b{:b}", sign(v), v.unsigned_abs())
}

pub fn dec(v: i64) -> String {
    format!("{}", v)
}

/// Format `v` in each selected base, in decimal, hex, binary order.
pub fn format_number(v: i64, bases: Bases, sep: &str, width: Option<usize>) -> String {
    let mut fields = Vec::with_capacity(3);

    if bases.contains(Bases::DEC) {
        fields.push(dec(v));
    }
    if bases.contains(Bases::HEX) {
        fields.push(hex(v));
    }
    if bases.contains(Bases::BIN) {
        fields.push(bin(v));
    }

    if let Some(w) = width {
        for field in fields.iter_mut() {
            *field = format!("{:<w$}", field, w = w);
        }
    }

    fields.join(sep)
}

/// Format a literal token in every base. Tokens that are not literals at
/// all come back unchanged.
pub fn format_conversion(token: &str) -> Result<String, LiteralError> {
    match literal::parse(token) {
        Ok(v) => Ok(format_number(v, Bases::ALL, " ", None)),
        Err(LiteralError::NotALiteral(_)) => Ok(token.to_string()),
        Err(e) => Err(e),
    }
}
