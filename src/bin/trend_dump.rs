//! Dump plot-ready data for a trend (or delimited) file as JSON.
//!
//! All file I/O lives here, on the caller's side; the library itself only
//! ever sees the text.
//!
//! ```text
//! trend_dump [--csv] [--ignore-species-count] <file>
//! ```

use std::fs;

use anyhow::{bail, Context, Result};

use trendex::delimited;
use trendex::trend::{build, BuildOptions};

fn main() -> Result<()> {
    env_logger::init();

    let mut path: Option<String> = None;
    let mut csv_mode = false;
    let mut options = BuildOptions::default();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--csv" => csv_mode = true,
            "--ignore-species-count" => options.ignore_species_count = true,
            other if other.starts_with("--") => bail!("unknown flag: {other}"),
            other => path = Some(other.to_string()),
        }
    }
    let Some(path) = path else {
        bail!("usage: trend_dump [--csv] [--ignore-species-count] <file>");
    };

    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;

    let json = if csv_mode {
        let rows = delimited::parse(&text).with_context(|| format!("parsing {path}"))?;
        serde_json::to_string_pretty(&rows)?
    } else {
        let series = build(&text, &options);
        serde_json::to_string_pretty(&series)?
    };

    println!("{json}");
    Ok(())
}
