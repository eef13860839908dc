//! Render projection: header cells, body cells or loading skeleton,
//! pagination gates, and resolved column widths.

use unicode_width::UnicodeWidthStr;

use crate::error::TableError;
use crate::sort::Direction;
use crate::table::Table;

/// Number of placeholder rows rendered while loading.
pub const SKELETON_ROWS: usize = 7;

/// Returns the sort indicator glyph for a direction.
pub fn sort_indicator(direction: Direction) -> &'static str {
    match direction {
        Direction::Asc => "↑",
        Direction::Desc => "↓",
    }
}

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    /// Sort indicator glyph, present when the column is sorted.
    pub indicator: Option<&'static str>,
    /// Whether the header is a sort trigger (drawn clickable).
    pub sortable: bool,
    /// Resolved width in display cells.
    pub width: u16,
}

impl HeaderCell {
    /// Returns the full header text, label plus indicator.
    pub fn text(&self) -> String {
        match self.indicator {
            Some(indicator) => format!("{} {}", self.label, indicator),
            None => self.label.clone(),
        }
    }
}

/// One rendered body cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Rendered cell content.
    Text(String),
    /// Loading placeholder standing in for unavailable content.
    Placeholder,
}

/// Pagination affordances for the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationView {
    /// `"Page {index+1} of {count}"`, empty when there are no pages.
    pub label: String,
    /// Gates the previous-page control.
    pub can_prev: bool,
    /// Gates the next-page control.
    pub can_next: bool,
}

/// Complete render projection of a table's current state.
///
/// Produced by [`render`] (or [`Table::view`]); the caller's drawing layer
/// walks headers and body and wires the pagination gates to its controls.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    /// Page rows as cells, or [`SKELETON_ROWS`] placeholder rows while
    /// loading. Always one cell per header column.
    pub body: Vec<Vec<Cell>>,
    pub pagination: PaginationView,
}

/// Builds the render projection for the table's current state.
///
/// While the loading flag is set the body is substituted with
/// [`SKELETON_ROWS`] placeholder rows (one placeholder cell per header
/// column) without reading row data or touching sort/page state.
pub fn render<R>(table: &Table<R>) -> Result<TableView, TableError> {
    let metas = table.headers();

    let body: Vec<Vec<Cell>> = if table.is_loading() {
        (0..SKELETON_ROWS)
            .map(|_| metas.iter().map(|_| Cell::Placeholder).collect())
            .collect()
    } else {
        table
            .page_rows()?
            .into_iter()
            .map(|row| {
                table
                    .columns()
                    .iter()
                    .map(|column| Cell::Text(column.cell_text(row)))
                    .collect()
            })
            .collect()
    };

    let headers = metas
        .into_iter()
        .enumerate()
        .map(|(index, meta)| {
            let indicator = meta.direction.map(sort_indicator);
            let mut cell = HeaderCell {
                id: meta.id,
                label: meta.label,
                indicator,
                sortable: meta.sortable,
                width: 0,
            };
            cell.width = match meta.width {
                Some(width) => width,
                None => derived_width(&cell, index, &body),
            };
            cell
        })
        .collect();

    Ok(TableView {
        headers,
        body,
        pagination: PaginationView {
            label: table.pagination_label(),
            can_prev: table.can_prev_page(),
            can_next: table.can_next_page(),
        },
    })
}

/// Widest of the header text and the column's visible cell contents, in
/// display cells. Placeholder cells contribute nothing; the skeleton takes
/// the header's width.
fn derived_width(header: &HeaderCell, index: usize, body: &[Vec<Cell>]) -> u16 {
    let mut width = header.text().width();
    for row in body {
        if let Some(Cell::Text(text)) = row.get(index) {
            width = width.max(text.width());
        }
    }
    u16::try_from(width).unwrap_or(u16::MAX)
}

impl TableView {
    /// Formats the view as aligned plain text, one line per row plus a
    /// pagination footer. Placeholder cells render as a shaded bar.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        for (i, header) in self.headers.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            push_padded(&mut out, &header.text(), header.width);
        }
        out.push('\n');

        for row in &self.body {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push_str("  ");
                }
                let width = self.headers.get(i).map(|h| h.width).unwrap_or(0);
                match cell {
                    Cell::Text(text) => push_padded(&mut out, text, width),
                    Cell::Placeholder => out.push_str(&"░".repeat(width as usize)),
                }
            }
            out.push('\n');
        }

        let prev = if self.pagination.can_prev { "<" } else { " " };
        let next = if self.pagination.can_next { ">" } else { " " };
        out.push_str(&format!("{} {} {}\n", prev, self.pagination.label, next));

        out
    }
}

fn push_padded(out: &mut String, text: &str, width: u16) {
    out.push_str(text);
    let pad = (width as usize).saturating_sub(text.width());
    for _ in 0..pad {
        out.push(' ');
    }
}

impl<R> Table<R> {
    /// Builds the render projection for the current state. See [`render`].
    pub fn view(&self) -> Result<TableView, TableError> {
        render(self)
    }
}
