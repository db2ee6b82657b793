//! Pure composition of the grid view from data, columns, sort, selection and
//! menu state. The Leptos grid wraps `compose` in a memo, so the layout is
//! rebuilt only when one of those inputs changes.

use super::action_menu::{ActionMenu, Placement, RowAction, RowActions};
use super::column::{Cell, Column, RowIdResolver};
use super::row::{GridRow, RowId};
use super::selection::{CheckState, ExternalSelection, SelectionStore};
use super::sort::{sorted_order, SortIndicator, SortState};

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// `None` for static (non-sortable) headers
    pub indicator: Option<SortIndicator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    pub id: RowId,
    /// Index into the page's data
    pub source_index: usize,
    /// Index in the current sort order
    pub position: usize,
    /// `None` when the grid is not selectable
    pub checked: Option<bool>,
    /// Resolved actions; empty hides the trigger
    pub actions: Vec<RowAction>,
    /// Placement of this row's menu when it is the open one
    pub menu: Option<Placement>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    pub header: Vec<HeaderCell>,
    /// State of the "select all" control; `None` when not selectable
    pub select_all: Option<CheckState>,
    pub rows: Vec<BodyRow>,
    pub has_action_column: bool,
    pub actions_disabled: bool,
}

impl GridLayout {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column span of the whole table, used by the empty-state row.
    pub fn span(&self) -> usize {
        self.header.len() + usize::from(self.select_all.is_some()) + usize::from(self.has_action_column)
    }

    /// Row identities in display order.
    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id.clone()).collect()
    }
}

/// Inputs fixed for the lifetime of a grid.
pub struct GridSpec<'a, T, V> {
    pub columns: &'a [Column<T, V>],
    pub get_row_id: &'a RowIdResolver<T>,
    pub row_actions: Option<&'a RowActions<T>>,
}

/// Builds the header and body rows.
///
/// `selection` is `None` for a non-selectable grid. Per-row actions are
/// resolved here on every pass and never cached.
pub fn compose<T, V, E>(
    spec: &GridSpec<'_, T, V>,
    data: &[T],
    sort: &SortState,
    selection: Option<&SelectionStore<E>>,
    menu: &ActionMenu,
) -> GridLayout
where
    T: GridRow,
    E: ExternalSelection,
{
    let header = spec
        .columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key.clone(),
            label: column.header.clone(),
            indicator: column.sortable.then(|| sort.indicator_for(&column.key)),
        })
        .collect();

    let rows: Vec<BodyRow> = sorted_order(data, sort)
        .into_iter()
        .enumerate()
        .map(|(position, source_index)| {
            let row = &data[source_index];
            let id = spec.get_row_id.resolve(row);
            BodyRow {
                checked: selection.map(|store| store.is_selected(&id)),
                actions: spec
                    .row_actions
                    .map(|actions| actions.resolve(row))
                    .unwrap_or_default(),
                menu: menu.placement_for(&id),
                id,
                source_index,
                position,
            }
        })
        .collect();

    let select_all = selection.map(|store| {
        let ids: Vec<RowId> = rows.iter().map(|row| row.id.clone()).collect();
        store.summary(&ids).check_state()
    });

    GridLayout {
        header,
        select_all,
        rows,
        has_action_column: spec.row_actions.is_some(),
        actions_disabled: menu.is_disabled(),
    }
}

/// Cells of one body row, in column order.
pub fn row_cells<T: GridRow, V>(columns: &[Column<T, V>], data: &[T], row: &BodyRow) -> Vec<Cell<V>> {
    columns
        .iter()
        .map(|column| column.cell(&data[row.source_index], row.position))
        .collect()
}
