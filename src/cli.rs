//! Command-line surface.
//!
//! Query strings must match the roster file byte for byte; there is no
//! normalisation or fuzzy matching anywhere downstream.

use std::path::PathBuf;

use clap::Parser;

use crate::data::select::{Mode, Query, Session};

/// Sentinel accepted by `--area2` / `--area3` meaning "not constrained".
const NONE_SENTINEL: &str = "none";

/// Select session chairs by area of expertise, excluding anyone who gives
/// a talk during the session in question.
#[derive(Parser)]
#[command(name = "chair-select")]
#[command(version)]
#[command(
    about = "Select session chairs from a candidate roster. \
             Query strings must match the roster file *exactly*."
)]
pub struct Cli {
    /// Roster file with candidate chairs (.csv or .tsv)
    #[arg(short = 'f', long)]
    pub filename: PathBuf,

    /// Primary area of expertise (comma-separated to accept several)
    #[arg(short = 'a', long, value_delimiter = ',', required = true)]
    pub area1: Vec<String>,

    /// Date of the session that needs a chair
    #[arg(short = 'd', long)]
    pub date: String,

    /// Start time of that session
    #[arg(short = 's', long = "start_time")]
    pub start_time: String,

    /// End time of that session
    #[arg(short = 'e', long = "end_time")]
    pub end_time: String,

    /// Secondary area of expertise ("none" leaves it unconstrained)
    #[arg(long, value_delimiter = ',', default_value = NONE_SENTINEL)]
    pub area2: Vec<String>,

    /// Tertiary area of expertise ("none" leaves it unconstrained)
    #[arg(long, value_delimiter = ',', default_value = NONE_SENTINEL)]
    pub area3: Vec<String>,

    /// Print every eligible chair ("all") or pick one at random ("random")
    #[arg(short = 'm', long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,
}

impl Cli {
    /// Split the parsed flags into the input path and the query,
    /// translating the `none` sentinel into an absent filter.
    pub fn into_query(self) -> (PathBuf, Query) {
        let query = Query {
            primary: self.area1,
            secondary: optional_areas(self.area2),
            tertiary: optional_areas(self.area3),
            excluded: Session {
                date: self.date,
                start: self.start_time,
                end: self.end_time,
            },
            mode: self.mode,
        };
        (self.filename, query)
    }
}

fn optional_areas(values: Vec<String>) -> Option<Vec<String>> {
    if values.len() == 1 && values[0] == NONE_SENTINEL {
        None
    } else {
        Some(values)
    }
}
