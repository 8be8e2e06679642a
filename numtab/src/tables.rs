///
/// Byte value conversion tables
///

use numutil::{bin, dec, hex};

use crate::errors::{Error, Result};

/// Largest value listed in a table.
pub const TABLE_MAX: i64 = 0xff;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Column {
    Hex,
    Bin,
    Dec,
}

impl Column {
    pub fn render(self, v: i64) -> String {
        match self {
            Column::Hex => hex(v),
            Column::Bin => bin(v),
            Column::Dec => dec(v),
        }
    }
}

#[derive(Debug)]
pub struct Table {
    pub key: &'static str,
    pub title: &'static str,
    pub columns: [Column; 3],
}

macro_rules! table {
    ($key:expr, $title:expr, $a:ident, $b:ident, $c:ident) => {
        Table {
            key: $key,
            title: $title,
            columns: [Column::$a, Column::$b, Column::$c],
        }
    };
}

// The "i" tables put the looked-up base last.
pub static TABLES: [Table; 6] = [
    table!("h", "Hexadecimal to Binary and Decimal", Hex, Bin, Dec),
    table!("b", "Binary to Hexadecimal and Decimal", Bin, Hex, Dec),
    table!("d", "Decimal to Hexadecimal and Binary", Dec, Hex, Bin),
    table!("ih", "Binary and Decimal to Hexadecimal", Bin, Dec, Hex),
    table!("ib", "Hexadecimal and Decimal to Binary", Hex, Dec, Bin),
    table!("id", "Hexadecimal and Binary to Decimal", Hex, Bin, Dec),
];

pub fn select(key: &str) -> Result<&'static Table> {
    TABLES
        .iter()
        .find(|t| t.key == key)
        .ok_or_else(|| Error::InvalidSelection(key.to_string()))
}

impl Table {
    pub fn rows(&self) -> Vec<[String; 3]> {
        (0..=TABLE_MAX)
            .map(|v| {
                [
                    self.columns[0].render(v),
                    self.columns[1].render(v),
                    self.columns[2].render(v),
                ]
            })
            .collect()
    }

    /// Render every row with each column padded to its widest entry.
    pub fn format(&self) -> String {
        let rows = self.rows();
        let mut widths = [0usize; 3];

        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.len());
            }
        }

        let mut s = String::new();

        for row in &rows {
            let line = format!(
                "{:<w0$} {:<w1$} {:<w2$}",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2]
            );
            s.push_str(line.trim_end());
            s.push('\n');
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_is_listed() {
        for table in TABLES.iter() {
            assert_eq!(table.rows().len(), 256, "table {}", table.key);
        }
    }

    #[test]
    fn hex_table_rows() {
        let table = select("h").unwrap();
        let text = table.format();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 256);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["0x00", "0b0", "0"]);
        assert_eq!(lines[255], "0xFF 0b11111111 255");
        assert_eq!(lines[10], "0x0A 0b1010     10");
    }

    #[test]
    fn inverse_tables_put_the_key_last() {
        let row = &select("ih").unwrap().rows()[171];
        assert_eq!(row, &["0b10101011".to_string(), "171".to_string(), "0xAB".to_string()]);
    }

    #[test]
    fn unknown_selection() {
        match select("x") {
            Err(Error::InvalidSelection(key)) => assert_eq!(key, "x"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in TABLES.iter().enumerate() {
            for b in TABLES.iter().skip(i + 1) {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
