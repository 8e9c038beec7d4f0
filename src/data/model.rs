use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Required roster columns
// ---------------------------------------------------------------------------

/// Columns every roster file must provide. Any further columns are kept
/// and printed, but never queried.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "area_of_expertise_1",
    "area_of_expertise_2",
    "area_of_expertise_3",
    "session_date",
    "session_start",
    "session_end",
];

// ---------------------------------------------------------------------------
// RosterRow – one candidate (one line of the source file)
// ---------------------------------------------------------------------------

/// A single candidate row. Cells are raw strings in header order; all
/// query matching is byte-for-byte equality, so nothing is parsed or
/// normalised here.
#[derive(Debug, Clone)]
pub struct RosterRow {
    /// Line number of this row in the source file (the header is line 1).
    pub line: usize,
    /// Cell values, one per column.
    pub cells: Vec<String>,
}

// ---------------------------------------------------------------------------
// Roster – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed roster with the required columns resolved to indices.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Ordered column names from the header row.
    pub columns: Vec<String>,
    /// All candidate rows, in file order.
    pub rows: Vec<RosterRow>,
    /// Indices of [`REQUIRED_COLUMNS`], in that order.
    required: [usize; REQUIRED_COLUMNS.len()],
}

impl Roster {
    /// Build a roster from a header row and data rows, resolving the
    /// required columns up front.
    pub fn from_table(columns: Vec<String>, rows: Vec<RosterRow>) -> Result<Self> {
        let mut required = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = columns
                .iter()
                .position(|h| h == name)
                .with_context(|| format!("roster missing '{name}' column"))?;
        }
        Ok(Roster {
            columns,
            rows,
            required,
        })
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Area of expertise of `row` at `rank` (0 = primary, 1 = secondary,
    /// 2 = tertiary).
    pub fn expertise<'a>(&self, row: &'a RosterRow, rank: usize) -> &'a str {
        debug_assert!(rank < 3);
        self.cell(row, self.required[rank])
    }

    /// Date of the session where `row`'s candidate gives their talk.
    pub fn session_date<'a>(&self, row: &'a RosterRow) -> &'a str {
        self.cell(row, self.required[3])
    }

    /// Start time of the candidate's own talk session.
    pub fn session_start<'a>(&self, row: &'a RosterRow) -> &'a str {
        self.cell(row, self.required[4])
    }

    /// End time of the candidate's own talk session.
    pub fn session_end<'a>(&self, row: &'a RosterRow) -> &'a str {
        self.cell(row, self.required[5])
    }

    fn cell<'a>(&self, row: &'a RosterRow, idx: usize) -> &'a str {
        row.cells.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Render the rows at `indices` as an aligned text table: header row
    /// first, then one line per candidate with the source-file line number
    /// in a leading unnamed column.
    pub fn render(&self, indices: &[usize]) -> String {
        let rows: Vec<&RosterRow> = indices.iter().map(|&i| &self.rows[i]).collect();

        let idx_width = rows
            .iter()
            .map(|r| r.line.to_string().len())
            .max()
            .unwrap_or(0);

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &rows {
            for (i, w) in widths.iter_mut().enumerate() {
                *w = (*w).max(row.cells.get(i).map_or(0, |c| c.len()));
            }
        }

        let mut out = String::new();

        let mut header = " ".repeat(idx_width);
        for (name, w) in self.columns.iter().zip(&widths) {
            header.push_str("  ");
            header.push_str(&format!("{name:<0$}", *w));
        }
        out.push_str(header.trim_end());
        out.push('\n');

        for row in &rows {
            let mut text = format!("{:>1$}", row.line, idx_width);
            for (i, w) in widths.iter().enumerate() {
                let cell = row.cells.get(i).map(String::as_str).unwrap_or("");
                text.push_str("  ");
                text.push_str(&format!("{cell:<0$}", *w));
            }
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with_extra_column() -> Roster {
        let mut columns: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        columns.insert(0, "name".to_string());
        let rows = vec![RosterRow {
            line: 2,
            cells: vec![
                "Ada".into(),
                "stars".into(),
                "galaxies".into(),
                "planets".into(),
                "2020-01-01".into(),
                "10:00".into(),
                "11:00".into(),
            ],
        }];
        Roster::from_table(columns, rows).unwrap()
    }

    #[test]
    fn resolves_required_columns_regardless_of_position() {
        let roster = roster_with_extra_column();
        let row = &roster.rows[0];
        assert_eq!(roster.expertise(row, 0), "stars");
        assert_eq!(roster.expertise(row, 2), "planets");
        assert_eq!(roster.session_date(row), "2020-01-01");
        assert_eq!(roster.session_end(row), "11:00");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let columns = vec!["area_of_expertise_1".to_string(), "session_date".to_string()];
        let err = Roster::from_table(columns, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("area_of_expertise_2"));
    }

    #[test]
    fn render_aligns_columns_and_prints_line_numbers() {
        let roster = roster_with_extra_column();
        let text = roster.render(&[0]);
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();
        assert!(header.contains("name"));
        assert!(header.contains("session_end"));
        assert!(row.starts_with('2'));
        assert!(row.contains("Ada"));
        // header and row line up column by column
        assert_eq!(
            header.find("session_date").unwrap(),
            row.find("2020-01-01").unwrap()
        );
    }

    #[test]
    fn render_of_empty_selection_is_header_only() {
        let roster = roster_with_extra_column();
        let text = roster.render(&[]);
        assert_eq!(text.lines().count(), 1);
    }
}
