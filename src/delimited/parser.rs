use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

/// One parsed row: an ordered sequence of cell values. Rows from the same
/// input are not required to have equal lengths.
pub type Row = Vec<String>;

const QUOTE: char = '"';

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A fatal parse failure, positioned by 1-based line number and 1-based
/// character offset within that line.
///
/// Either variant aborts the whole parse; there is no partial-row recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quote character appeared outside a quoted field.
    #[error("line {line}, character {offset}: unexpected quote")]
    UnexpectedQuote { line: usize, offset: usize },

    /// The input ended while still inside a quoted field.
    #[error("line {line}, character {offset}: unexpected end of input inside quoted field")]
    UnterminatedQuotedField { line: usize, offset: usize },
}

// ---------------------------------------------------------------------------
// Cursor: forward-only character stream with line/offset tracking
// ---------------------------------------------------------------------------

/// Single forward-only cursor over the input. The line counter increments on
/// every LF consumed, including LFs inside quoted fields; `offset` is the
/// 1-based position of the next unread character on the current line.
struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor {
            chars: input.chars().peekable(),
            line: 1,
            offset: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next();
        match c {
            Some('\n') => {
                self.line += 1;
                self.offset = 1;
            }
            Some(_) => self.offset += 1,
            None => {}
        }
        c
    }

    fn at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse comma-delimited, quote-escaped text into rows.
///
/// Row separators are `\n`, `\r\n` or bare `\r`. A trailing row without a
/// trailing newline is still emitted, and empty input produces zero rows.
/// Quoted fields may contain delimiters, quotes (escaped as `""`) and line
/// breaks; a quote anywhere in an unquoted field is an error.
pub fn parse(input: &str) -> Result<Vec<Row>, ParseError> {
    parse_with_delimiter(input, ',')
}

/// [`parse`] with a caller-chosen field delimiter.
pub fn parse_with_delimiter(input: &str, delimiter: char) -> Result<Vec<Row>, ParseError> {
    let mut rows: Vec<Row> = Vec::new();
    if input.is_empty() {
        return Ok(rows);
    }

    let mut cursor = Cursor::new(input);
    let mut row: Row = Vec::new();

    loop {
        row.push(parse_field(&mut cursor, delimiter)?);

        match cursor.peek() {
            Some(c) if c == delimiter => {
                cursor.next();
            }
            Some('\n') => {
                cursor.next();
                rows.push(std::mem::take(&mut row));
                // A trailing newline does not open another row.
                if cursor.at_end() {
                    break;
                }
            }
            Some('\r') => {
                cursor.next();
                if cursor.peek() == Some('\n') {
                    cursor.next();
                }
                rows.push(std::mem::take(&mut row));
                if cursor.at_end() {
                    break;
                }
            }
            None => {
                rows.push(row);
                break;
            }
            Some(_) => unreachable!("field parser stops only at delimiter, CR, LF or end of input"),
        }
    }

    Ok(rows)
}

/// Parse a single field, leaving the cursor on the delimiter, row break or
/// end of input that terminated it.
fn parse_field(cursor: &mut Cursor, delimiter: char) -> Result<String, ParseError> {
    let mut value = String::new();

    if cursor.peek() == Some(QUOTE) {
        // Opening quote is consumed, not part of the value.
        cursor.next();
        loop {
            let (line, offset) = (cursor.line, cursor.offset);
            match cursor.next() {
                None => return Err(ParseError::UnterminatedQuotedField { line, offset }),
                Some(QUOTE) => {
                    if cursor.peek() == Some(QUOTE) {
                        // Escaped literal quote: consume two, emit one.
                        cursor.next();
                        value.push(QUOTE);
                    } else {
                        // Closing quote. Only a delimiter, a row break or the
                        // end of input may follow it.
                        match cursor.peek() {
                            Some(c) if c == delimiter || c == '\r' || c == '\n' => {}
                            None => {}
                            Some(_) => {
                                return Err(ParseError::UnexpectedQuote { line, offset });
                            }
                        }
                        break;
                    }
                }
                Some(c) => value.push(c),
            }
        }
    } else {
        while let Some(c) = cursor.peek() {
            if c == delimiter || c == '\r' || c == '\n' {
                break;
            }
            if c == QUOTE {
                return Err(ParseError::UnexpectedQuote {
                    line: cursor.line,
                    offset: cursor.offset,
                });
            }
            cursor.next();
            value.push(c);
        }
    }

    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
