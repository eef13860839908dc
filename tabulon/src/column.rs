//! Column descriptors: how one column is labeled, sorted, and rendered.

use std::fmt;
use std::rc::Rc;

use crate::value::CellValue;

/// Extracts the comparable value for a cell from an opaque row.
pub type CellAccessor<R> = Rc<dyn Fn(&R) -> CellValue>;

/// Renders the display text for a cell from an opaque row.
pub type CellRender<R> = Rc<dyn Fn(&R) -> String>;

/// Renders the display text for a header.
pub type HeaderRender = Rc<dyn Fn() -> String>;

/// Immutable descriptor for one table column.
///
/// The row type `R` stays opaque to the engine: sorting reads values through
/// the accessor, and rendering goes through the cell render function (or
/// falls back to the accessor value's display form). Columns are sortable by
/// default; opt out per column.
///
/// # Example
///
/// ```
/// use tabulon::{CellValue, Column};
///
/// struct Pool {
///     name: String,
///     volume_usd: f64,
/// }
///
/// let column = Column::new("volumeUSD", |p: &Pool| CellValue::from(p.volume_usd))
///     .with_header("Volume (24h)")
///     .with_cell_render(|p: &Pool| format!("${:.2}", p.volume_usd))
///     .with_width(14);
/// ```
pub struct Column<R> {
    id: String,
    header: Option<String>,
    header_render: Option<HeaderRender>,
    cell_render: Option<CellRender<R>>,
    accessor: CellAccessor<R>,
    sortable: bool,
    width: Option<u16>,
}

impl<R> Column<R> {
    /// Creates a column with an id and a value accessor.
    ///
    /// The id doubles as the header label until one is set.
    pub fn new(id: impl Into<String>, accessor: impl Fn(&R) -> CellValue + 'static) -> Self {
        Self {
            id: id.into(),
            header: None,
            header_render: None,
            cell_render: None,
            accessor: Rc::new(accessor),
            sortable: true,
            width: None,
        }
    }

    /// Sets the header label.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets a header render function, overriding the plain label.
    pub fn with_header_render(mut self, render: impl Fn() -> String + 'static) -> Self {
        self.header_render = Some(Rc::new(render));
        self
    }

    /// Sets a cell render function, overriding the accessor's display form.
    pub fn with_cell_render(mut self, render: impl Fn(&R) -> String + 'static) -> Self {
        self.cell_render = Some(Rc::new(render));
        self
    }

    /// Sets a fixed column width in display cells.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets whether header clicks can sort this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Returns the column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the rendered header label.
    pub fn label(&self) -> String {
        if let Some(render) = &self.header_render {
            render()
        } else {
            self.header.clone().unwrap_or_else(|| self.id.clone())
        }
    }

    /// Returns `true` if this column can be sorted.
    pub fn can_sort(&self) -> bool {
        self.sortable
    }

    /// Returns the fixed width, if one was set.
    pub fn width(&self) -> Option<u16> {
        self.width
    }

    /// Extracts the comparable value for a row.
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Renders the display text for a row's cell.
    pub fn cell_text(&self, row: &R) -> String {
        match &self.cell_render {
            Some(render) => render(row),
            None => self.value(row).to_string(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            header_render: self.header_render.clone(),
            cell_render: self.cell_render.clone(),
            accessor: Rc::clone(&self.accessor),
            sortable: self.sortable,
            width: self.width,
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
