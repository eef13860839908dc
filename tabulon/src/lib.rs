//! Headless data-table engine.
//!
//! Takes arbitrary row data plus column descriptors and produces the
//! current visible page in sorted order, header render metadata, and
//! pagination affordances. Rendering is left entirely to the caller; the
//! crate only projects state into [`TableView`] values.

pub mod column;
pub mod error;
pub mod page;
pub mod sort;
pub mod table;
pub mod value;
pub mod view;

pub use column::{CellAccessor, CellRender, Column, HeaderRender};
pub use error::TableError;
pub use page::{Pager, DEFAULT_PAGE_SIZE};
pub use sort::{Direction, SortEntry, SortState};
pub use table::{Header, Table};
pub use value::CellValue;
pub use view::{render, sort_indicator, Cell, HeaderCell, PaginationView, TableView, SKELETON_ROWS};
