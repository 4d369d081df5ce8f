//! Serialization back into the dialect [`super::parser`] reads.

use super::parser::Row;

const QUOTE: char = '"';

/// Serialize rows with `,` as the delimiter.
pub fn write_rows_default(rows: &[Row]) -> String {
    write_rows(rows, ',')
}

/// Serialize rows into delimited text.
///
/// Fields containing the delimiter, a quote or a line break are quoted with
/// embedded quotes doubled; everything else is written verbatim. Every row
/// is terminated by `\n` (not merely separated, so that a final row holding
/// a single empty cell survives the trip back through the parser).
pub fn write_rows(rows: &[Row], delimiter: char) -> String {
    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .map(|cell| write_field(cell, delimiter))
            .collect::<Vec<_>>()
            .join(&delimiter.to_string());
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn write_field(cell: &str, delimiter: char) -> String {
    let needs_quoting = cell
        .chars()
        .any(|c| c == delimiter || c == QUOTE || c == '\r' || c == '\n');
    if !needs_quoting {
        return cell.to_string();
    }

    let mut out = String::with_capacity(cell.len() + 2);
    out.push(QUOTE);
    for c in cell.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
    out
}
