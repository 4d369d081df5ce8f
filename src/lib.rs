//! Core data-transformation layer for biodiversity index charts.
//!
//! Two independent text formats come in, plot-ready structures come out:
//!
//! ```text
//!  uploaded CSV text          trend output text (year index lowerCI upperCI [n])
//!        │                          │
//!        ▼                          ▼
//!  ┌────────────┐            ┌────────────┐
//!  │ delimited   │            │   trend    │
//!  │ parse/write │            │  builder   │
//!  └────────────┘            └────────────┘
//!        │                          │
//!        ▼                          ▼
//!   Vec<Vec<String>>            PlotSeries (labels + solid/dashed/CI arrays)
//! ```
//!
//! Everything here is pure and synchronous: callers own the input text and
//! the returned structures, and no state is shared between calls. File and
//! network I/O stay on the caller's side (see `src/bin/trend_dump.rs` for a
//! thin example caller).

pub mod consistency;
pub mod delimited;
pub mod format;
pub mod species;
pub mod trend;

pub use delimited::{parse, parse_with_delimiter, ParseError, Row};
pub use trend::{build, model_summary, BuildOptions, ModelCounts, PlotSeries, SeriesPoint};
