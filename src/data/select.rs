use clap::ValueEnum;
use rand::Rng;
use thiserror::Error;

use super::model::{Roster, RosterRow};

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Output mode: print every match or pick one at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    All,
    Random,
}

/// The session that needs a chair. Candidates giving a talk in this
/// window are excluded; a talk on the same date in a fully different
/// time slot stays eligible.
#[derive(Debug, Clone)]
pub struct Session {
    pub date: String,
    pub start: String,
    pub end: String,
}

/// A chair-selection query. Each area holds one or more values matched by
/// exact string equality; a row passes when its column equals any of them.
#[derive(Debug, Clone)]
pub struct Query {
    pub primary: Vec<String>,
    pub secondary: Option<Vec<String>>,
    pub tertiary: Option<Vec<String>>,
    pub excluded: Session,
    pub mode: Mode,
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("no candidate matched the query, cannot pick one at random")]
    EmptyPool,
}

// ---------------------------------------------------------------------------
// Selection pipeline
// ---------------------------------------------------------------------------

/// Return the roster indices of eligible chairs.
///
/// Filters are applied as a sequence, each narrowing the previous pool:
/// 1. primary area equals any of `query.primary`
/// 2. secondary area, if given
/// 3. tertiary area, if given
/// 4. drop rows whose own talk falls in the excluded session window
///
/// Under [`Mode::All`] the whole surviving pool is returned (possibly
/// empty); under [`Mode::Random`] exactly one uniformly chosen index, and
/// an empty pool is an error.
pub fn select_chairs(roster: &Roster, query: &Query) -> Result<Vec<usize>, SelectError> {
    let mut pool: Vec<usize> = roster
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| matches_any(&query.primary, roster.expertise(row, 0)))
        .map(|(i, _)| i)
        .collect();
    log::debug!("primary filter: {} candidates", pool.len());

    for (rank, values) in [(1, &query.secondary), (2, &query.tertiary)] {
        if let Some(values) = values {
            pool.retain(|&i| matches_any(values, roster.expertise(&roster.rows[i], rank)));
            log::debug!("rank-{rank} filter: {} candidates", pool.len());
        }
    }

    pool.retain(|&i| !has_conflict(roster, &roster.rows[i], &query.excluded));
    log::debug!("after schedule exclusion: {} candidates", pool.len());

    match query.mode {
        Mode::All => Ok(pool),
        Mode::Random => {
            if pool.is_empty() {
                return Err(SelectError::EmptyPool);
            }
            let pick = rand::rng().random_range(0..pool.len());
            Ok(vec![pool[pick]])
        }
    }
}

fn matches_any(values: &[String], cell: &str) -> bool {
    values.iter().any(|v| v.as_str() == cell)
}

/// A candidate on a different date never conflicts; on the excluded date
/// they stay eligible only when start and end both differ.
fn has_conflict(roster: &Roster, row: &RosterRow, excluded: &Session) -> bool {
    roster.session_date(row) == excluded.date
        && (roster.session_start(row) == excluded.start
            || roster.session_end(row) == excluded.end)
}
