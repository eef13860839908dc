//! Sort state: ordered column/direction entries with a 3-state toggle.

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// One active sort: a column id and a direction.
#[derive(Debug, Clone, PartialEq)]
pub struct SortEntry {
    pub column: String,
    pub direction: Direction,
}

/// Ordered sort entries for a table.
///
/// Empty means "unsorted / original order". The engine supports multiple
/// entries for secondary sorting via [`then`](SortState::then), but the
/// header-click interaction drives this as a single active column:
/// [`toggle`](SortState::toggle) replaces whatever was sorted before.
///
/// # Example
///
/// ```
/// use tabulon::{Direction, SortState};
///
/// let mut sort = SortState::new();
/// sort.toggle("volumeUSD");
/// assert_eq!(sort.direction_of("volumeUSD"), Some(Direction::Asc));
/// sort.toggle("volumeUSD");
/// assert_eq!(sort.direction_of("volumeUSD"), Some(Direction::Desc));
/// sort.toggle("volumeUSD");
/// assert_eq!(sort.direction_of("volumeUSD"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    entries: Vec<SortEntry>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active entries in priority order.
    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Returns `true` if no sort is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the direction of the given column, if it is being sorted.
    pub fn direction_of(&self, column: &str) -> Option<Direction> {
        self.entries
            .iter()
            .find(|e| e.column == column)
            .map(|e| e.direction)
    }

    /// Advances the column through the unsorted -> asc -> desc -> unsorted
    /// cycle, replacing any other column's sort.
    ///
    /// Toggling a column that is not the current primary sort clears the
    /// previous state and starts the new column at ascending.
    pub fn toggle(&mut self, column: &str) {
        let next = match self.entries.first() {
            Some(e) if e.column == column => match e.direction {
                Direction::Asc => Some(Direction::Desc),
                Direction::Desc => None,
            },
            _ => Some(Direction::Asc),
        };

        self.entries.clear();
        if let Some(direction) = next {
            self.entries.push(SortEntry {
                column: column.to_string(),
                direction,
            });
        }
    }

    /// Appends a secondary sort on a column. If the column is already being
    /// sorted, its direction is updated in place instead.
    pub fn then(&mut self, column: impl Into<String>, direction: Direction) {
        let column = column.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.column == column) {
            entry.direction = direction;
        } else {
            self.entries.push(SortEntry { column, direction });
        }
    }

    /// Clears all sorting, restoring original row order.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
