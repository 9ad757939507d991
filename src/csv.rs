// src/csv.rs
use std::io::{self, Write};

use crate::data::ResultTable;

/// UTF-8 byte order mark, so spreadsheet apps pick the right encoding for Hangul.
pub const BOM: &str = "\u{FEFF}";

const SEP: char = ',';

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row then one row per record. No BOM.
pub fn write_table<W: Write>(mut w: W, table: &ResultTable) -> io::Result<()> {
    write_row(&mut w, &table.headers(), SEP)?;
    for r in table.rows() {
        write_row(&mut w, &r, SEP)?;
    }
    Ok(())
}

/// Whole table as CSV text, for the clipboard.
pub fn to_csv_string(table: &ResultTable) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, table)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// CSV for download/export: BOM + [`to_csv_string`].
pub fn to_export_string(table: &ResultTable) -> io::Result<String> {
    Ok(join!(BOM, &to_csv_string(table)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &vec![s!("a"), s!("b,c"), s!("say \"hi\""), s!("x\ny")], ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "a,\"b,c\",\"say \"\"hi\"\"\",\"x\ny\"\n"
        );
    }

    #[test]
    fn empty_table_is_header_only() {
        let s = to_export_string(&ResultTable::new()).unwrap();
        assert_eq!(s, "\u{FEFF}권수와 연차,내용,URL\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_reach_the_caller() {
        let err = write_table(Broken, &ResultTable::new()).unwrap_err();
        assert_eq!(err.to_string(), "disk gone");
    }
}
