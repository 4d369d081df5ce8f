/// Delimited-text layer: parsing and writing of quote-escaped tabular text.
///
/// Architecture:
/// ```text
///   raw text (uploads, response bodies)
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  character state machine → Vec<Row>, or ParseError
///   └──────────┘     with 1-based line/offset positions
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  Vec<Row> → text in the same dialect (quote when needed)
///   └──────────┘
/// ```
///
/// The parser accepts `\n`, `\r\n` and bare `\r` row separators, `"` as the
/// quote character and `""` as an escaped quote. Rows are not required to
/// have equal lengths; ragged input passes through untouched.

pub mod parser;
pub mod writer;

pub use parser::{parse, parse_with_delimiter, ParseError, Row};
pub use writer::{write_rows, write_rows_default};
