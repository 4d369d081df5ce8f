//! Differential tests: the hand-written delimited parser against the `csv`
//! crate configured for the same dialect, plus write/parse round-trips.
//!
//! Inputs here stay within the grammar both implementations accept (the
//! oracle skips blank lines and tolerates rogue quotes, which our parser
//! deliberately does not), so any disagreement is a real parser bug.

use csv::ReaderBuilder;
use proptest::prelude::*;

use trendex::delimited::{parse, write_rows_default, Row};

fn oracle_rows(text: &str) -> Vec<Row> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|record| {
            record
                .expect("oracle accepts well-formed input")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[test]
fn agrees_with_oracle_on_plain_grids() {
    let inputs = [
        "a,b,c\n1,2,3\n",
        "a,b,c\n1,2,3",
        "a,b,c\r\nx,y,z",
        "a,b,c\n1,2",
        "a,,b\n,x,",
        "single",
    ];
    for text in inputs {
        assert_eq!(parse(text).unwrap(), oracle_rows(text), "input: {text:?}");
    }
}

#[test]
fn agrees_with_oracle_on_quoted_fields() {
    let inputs = [
        "name,notes\nalpha,\"has, comma\"",
        "alpha,\"line\nbreak\",end",
        "gamma,\"say \"\"hi\"\"\"",
        "\"a\",\"b\"\r\n\"c\",\"d\"",
    ];
    for text in inputs {
        assert_eq!(parse(text).unwrap(), oracle_rows(text), "input: {text:?}");
    }
}

proptest! {
    #[test]
    fn quote_free_input_is_a_plain_split(
        lines in proptest::collection::vec("[a-z0-9, ]{1,12}", 1..8)
    ) {
        let text = lines.join("\n");
        let expected: Vec<Row> = lines
            .iter()
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect();
        prop_assert_eq!(parse(&text).unwrap(), expected);
    }

    #[test]
    fn agrees_with_oracle_on_generated_grids(
        rows in proptest::collection::vec(
            proptest::collection::vec("[a-z0-9 ]{1,8}", 1..6),
            1..8,
        )
    ) {
        let text = write_rows_default(&rows);
        prop_assert_eq!(parse(&text).unwrap(), oracle_rows(&text));
    }

    #[test]
    fn write_parse_round_trip_is_identity(
        rows in proptest::collection::vec(
            proptest::collection::vec("[a-z0-9,\" \n]{0,8}", 1..5),
            0..8,
        )
    ) {
        let text = write_rows_default(&rows);
        prop_assert_eq!(parse(&text).unwrap(), rows);
    }
}
