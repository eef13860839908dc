//! The table engine: sort state, pagination, and row projections.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::column::Column;
use crate::error::TableError;
use crate::page::Pager;
use crate::sort::{Direction, SortState};
use crate::value::CellValue;

/// Render metadata for one header cell, independent of row data.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Column id, the target for [`Table::toggle_sort`].
    pub id: String,
    /// Rendered header label.
    pub label: String,
    /// Whether clicking this header toggles sorting.
    pub sortable: bool,
    /// Current sort direction, if this column is sorted.
    pub direction: Option<Direction>,
    /// Fixed width from the descriptor, if any.
    pub width: Option<u16>,
}

/// Headless table engine over an opaque row type.
///
/// Owns the sort and pagination state; every row-producing call is a pure
/// projection of `(rows, columns, sort, page)` recomputed on demand, so
/// repeated calls with unchanged state yield identical output. State changes
/// only through the explicit interaction methods (header toggle, page
/// navigation, dataset replacement).
///
/// # Example
///
/// ```
/// use tabulon::{CellValue, Column, Table};
///
/// let columns = vec![
///     Column::new("name", |n: &(&str, i64)| CellValue::from(n.0)),
///     Column::new("volume", |n: &(&str, i64)| CellValue::from(n.1)),
/// ];
/// let rows = vec![("a", 5), ("b", 1), ("c", 3)];
///
/// let mut table = Table::new(columns, rows)?;
/// table.toggle_sort("volume");
/// let sorted = table.sorted_rows()?;
/// assert_eq!(sorted[0].1, 1);
/// # Ok::<(), tabulon::TableError>(())
/// ```
pub struct Table<R> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    sort: SortState,
    pager: Pager,
    loading: bool,
}

impl<R> Table<R> {
    /// Creates a table with default state: no sort, page 0, not loading.
    ///
    /// Errors if `columns` is empty or contains duplicate ids. `rows` may be
    /// empty; the table then renders zero data rows.
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id().to_string()) {
                return Err(TableError::duplicate_column(column.id()));
            }
        }

        Ok(Self {
            columns,
            rows,
            sort: SortState::new(),
            pager: Pager::new(),
            loading: false,
        })
    }

    /// Sets the page size before use. Defaults to 10.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.pager = self.pager.with_page_size(size);
        self
    }

    /// Starts the table in loading state (skeleton body until data arrives).
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Returns the raw rows in original order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the total row count.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Replaces the dataset, keeping sort state and clamping the page index
    /// down if the data shrank.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.pager.clamp(self.rows.len());
        log::debug!(
            "[table] set_rows: {} rows, page_index={}",
            self.rows.len(),
            self.pager.page_index()
        );
    }

    /// Sets the loading flag. This only selects skeleton rendering in the
    /// view; it never touches sort or pagination state.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Returns `true` if the table is in loading state.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Returns the current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Replaces the sort state wholesale, for callers driving multi-column
    /// sorts directly instead of through header toggles.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Advances a column through the unsorted -> asc -> desc -> unsorted
    /// cycle. Unknown or unsortable column ids are a no-op, not an error.
    pub fn toggle_sort(&mut self, column_id: &str) {
        let Some(column) = self.columns.iter().find(|c| c.id() == column_id) else {
            log::debug!("[table] toggle_sort: unknown column '{column_id}', ignoring");
            return;
        };
        if !column.can_sort() {
            log::debug!("[table] toggle_sort: column '{column_id}' is not sortable, ignoring");
            return;
        }

        self.sort.toggle(column_id);
        log::debug!(
            "[table] toggle_sort: '{column_id}' -> {:?}",
            self.sort.direction_of(column_id)
        );
    }

    /// Returns all rows in sorted order.
    ///
    /// The sort is stable: rows with equal keys keep their original relative
    /// order. Errors if a sorted column mixes value families or contains a
    /// NaN key; the rows are never silently misordered.
    pub fn sorted_rows(&self) -> Result<Vec<&R>, TableError> {
        if self.sort.is_empty() {
            return Ok(self.rows.iter().collect());
        }

        // Resolve entries to columns; ids with no matching column (from a
        // caller-supplied sort state) are skipped.
        let mut levels: Vec<(&Column<R>, Direction)> = Vec::new();
        for entry in self.sort.entries() {
            match self.columns.iter().find(|c| c.id() == entry.column) {
                Some(column) => levels.push((column, entry.direction)),
                None => {
                    log::debug!(
                        "[table] sorted_rows: sort entry '{}' has no column, skipping",
                        entry.column
                    );
                }
            }
        }

        // Extract and validate keys up front so the comparator below is
        // total. Mixing families within one column is an error; Null is
        // comparable with everything and sorts first ascending.
        let mut keys: Vec<Vec<CellValue>> = Vec::with_capacity(levels.len());
        for (column, _) in &levels {
            let values: Vec<CellValue> = self.rows.iter().map(|row| column.value(row)).collect();

            let mut representative: Option<&CellValue> = None;
            for value in &values {
                if value.is_unordered() {
                    return Err(TableError::nan_sort_key(column.id()));
                }
                if value.is_null() {
                    continue;
                }
                match representative {
                    None => representative = Some(value),
                    Some(rep) if rep.family() != value.family() => {
                        return Err(TableError::incomparable(
                            column.id(),
                            rep.type_name(),
                            value.type_name(),
                        ));
                    }
                    Some(_) => {}
                }
            }

            keys.push(values);
        }

        let mut indices: Vec<usize> = (0..self.rows.len()).collect();
        // sort_by is stable, which gives the original-index tie-break.
        indices.sort_by(|&a, &b| {
            for (level, (_, direction)) in levels.iter().enumerate() {
                let ordering = keys[level][a]
                    .try_cmp(&keys[level][b])
                    .unwrap_or(Ordering::Equal);
                let ordering = match direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });

        Ok(indices.into_iter().map(|i| &self.rows[i]).collect())
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Returns the current page's slice of the sorted rows.
    ///
    /// An out-of-range page index (after a data shrink) is clamped down to
    /// the last valid page before slicing; this never errors on bounds.
    pub fn page_rows(&self) -> Result<Vec<&R>, TableError> {
        let sorted = self.sorted_rows()?;
        let range = self.pager.range(sorted.len());
        Ok(sorted[range].to_vec())
    }

    /// Returns the current 0-based page index.
    pub fn page_index(&self) -> usize {
        self.pager.page_index()
    }

    /// Returns the total number of pages.
    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.rows.len())
    }

    /// Returns `true` if there is a page after the current one.
    pub fn can_next_page(&self) -> bool {
        self.pager.can_next(self.rows.len())
    }

    /// Returns `true` if there is a page before the current one.
    pub fn can_prev_page(&self) -> bool {
        self.pager.can_prev()
    }

    /// Advances to the next page; a no-op at the last page.
    /// Returns `true` if the page changed.
    pub fn next_page(&mut self) -> bool {
        let moved = self.pager.next(self.rows.len());
        if moved {
            log::debug!("[table] next_page -> {}", self.pager.page_index());
        }
        moved
    }

    /// Moves to the previous page; a no-op at page 0.
    /// Returns `true` if the page changed.
    pub fn prev_page(&mut self) -> bool {
        let moved = self.pager.prev(self.rows.len());
        if moved {
            log::debug!("[table] prev_page -> {}", self.pager.page_index());
        }
        moved
    }

    /// Human-readable pagination label: `"Page {index+1} of {count}"`, or
    /// the empty string when there are no rows.
    pub fn pagination_label(&self) -> String {
        self.pager.label(self.rows.len())
    }

    // ========================================================================
    // Headers
    // ========================================================================

    /// Returns render metadata for each header cell.
    pub fn headers(&self) -> Vec<Header> {
        self.columns
            .iter()
            .map(|column| Header {
                id: column.id().to_string(),
                label: column.label(),
                sortable: column.can_sort(),
                direction: self.sort.direction_of(column.id()),
                width: column.width(),
            })
            .collect()
    }
}

impl<R> std::fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("sort", &self.sort)
            .field("pager", &self.pager)
            .field("loading", &self.loading)
            .finish()
    }
}
