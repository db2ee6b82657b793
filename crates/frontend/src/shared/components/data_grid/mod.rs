//! Data grid used by every list page: sortable columns, row selection owned
//! either by the grid or by the page, and a per-row action menu.
//!
//! The state logic (`sort`, `selection`, `action_menu`, `pipeline`) is plain
//! Rust; `grid`, `header_cell`, `checkbox` and `row_menu` are its Leptos view.

pub mod action_menu;
pub mod checkbox;
pub mod column;
pub mod grid;
pub mod header_cell;
pub mod pipeline;
pub mod row;
pub mod row_menu;
pub mod selection;
pub mod sort;

pub use action_menu::{Placement, RowAction, RowActions};
pub use column::{Column, RowIdResolver};
pub use grid::{DataGrid, GridColumn};
pub use row::{CellValue, GridRow, RowId};
pub use selection::{selected_in, SelectionSummary};
pub use sort::{SortDirection, SortState};
