/// Data layer: core types, loading, and selection.
///
/// Architecture:
/// ```text
///  .csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Roster
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Roster   │  Vec<RosterRow>, column index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  expertise + schedule predicates → eligible indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod select;
