//! Species-list CSV helpers.
//!
//! Supports the species picker's import/export workflow: users paste or
//! upload loosely formatted ID lists, and download a clean species table.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Taxon IDs look like `u123`, `m45a`, `p_9`: a prefix of `p`/`m`/`u`/`_`
/// characters, digits, then an optional subspecies letter.
static SPECIES_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[pmu_]+[0-9]+[a-z]?$").expect("static pattern compiles"));

/// Pull species IDs out of pasted or uploaded CSV-ish text.
///
/// The text is split on line breaks and commas, tokens are trimmed, and
/// only tokens matching the taxon ID shape survive. Headers, names and
/// stray punctuation fall out naturally.
pub fn extract_species_ids(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|token| SPECIES_ID.is_match(token))
        .map(str::to_string)
        .collect()
}

/// One row of the downloadable species table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub common_name: Option<String>,
    pub scientific_name: Option<String>,
    pub id: i64,
}

/// Render the species table as CSV text.
///
/// Name fields are sanitised by replacing commas, quotes and line breaks
/// with spaces rather than quoting, so downstream spreadsheet tools never
/// have to deal with quoting at all.
pub fn species_csv(records: &[SpeciesRecord]) -> String {
    let mut out = String::from("TaxonCommonName,TaxonScientificName,TaxonID\n");
    for record in records {
        let common = sanitise(record.common_name.as_deref().unwrap_or(""));
        let scientific = sanitise(record.scientific_name.as_deref().unwrap_or(""));
        out.push_str(&format!("{common},{scientific},{}\n", record.id));
    }
    out
}

fn sanitise(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            ',' | '"' | '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}
