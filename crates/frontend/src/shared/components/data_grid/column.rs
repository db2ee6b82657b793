//! Column model: how one field of a row is rendered and whether it sorts.

use super::row::{CellValue, GridRow, RowId};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

type RenderFn<T, V> = Arc<dyn Fn(&T, usize) -> V + Send + Sync>;

/// Column definition for the data grid.
///
/// `V` is the renderable produced by a custom renderer (an `AnyView` in the
/// Leptos grid).
pub struct Column<T, V> {
    /// Field key, unique within a column set
    pub key: String,
    /// Header label
    pub header: String,
    pub sortable: bool,
    /// Render the cell in bold
    pub emphasize: bool,
    render: Option<RenderFn<T, V>>,
}

impl<T, V> Column<T, V> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            emphasize: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn emphasize(mut self) -> Self {
        self.emphasize = true;
        self
    }

    /// Custom renderer; receives the row and its index in the current sort order.
    pub fn render(mut self, render: impl Fn(&T, usize) -> V + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Cell content for `row` at position `index` of the current order.
    ///
    /// A renderer, when present, is authoritative. Otherwise the raw value at
    /// `row[key]` is returned untouched.
    pub fn cell(&self, row: &T, index: usize) -> Cell<V>
    where
        T: GridRow,
    {
        match &self.render {
            Some(render) => Cell::Rendered(render(row, index)),
            None => Cell::Value(row.field(&self.key)),
        }
    }
}

impl<T, V> Clone for Column<T, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            emphasize: self.emphasize,
            render: self.render.clone(),
        }
    }
}

impl<T, V> fmt::Debug for Column<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("emphasize", &self.emphasize)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Content of a single body cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<V> {
    Rendered(V),
    Value(CellValue),
}

/// Keys that occur more than once in a column set.
pub fn duplicate_keys<T, V>(columns: &[Column<T, V>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for column in columns {
        if !seen.insert(column.key.as_str()) && !duplicates.contains(&column.key) {
            duplicates.push(column.key.clone());
        }
    }
    duplicates
}

/// Extracts row identities.
///
/// The resolver must be injective over the current data and depend only on
/// the record's persistent identity, never on its position. Two rows with the
/// same id share one selection slot.
pub enum RowIdResolver<T> {
    /// Read the field named `id`
    IdField,
    Custom(Arc<dyn Fn(&T) -> RowId + Send + Sync>),
}

impl<T: GridRow> RowIdResolver<T> {
    pub fn custom(get_row_id: impl Fn(&T) -> RowId + Send + Sync + 'static) -> Self {
        RowIdResolver::Custom(Arc::new(get_row_id))
    }

    pub fn resolve(&self, row: &T) -> RowId {
        match self {
            RowIdResolver::IdField => row.row_id().unwrap_or_else(|| {
                log::warn!("data grid row has no `id` field; supply a row id resolver");
                RowId::new()
            }),
            RowIdResolver::Custom(get_row_id) => get_row_id(row),
        }
    }

    pub fn resolve_all(&self, data: &[T]) -> Vec<RowId> {
        data.iter().map(|row| self.resolve(row)).collect()
    }
}

impl<T> Default for RowIdResolver<T> {
    fn default() -> Self {
        RowIdResolver::IdField
    }
}

impl<T> Clone for RowIdResolver<T> {
    fn clone(&self) -> Self {
        match self {
            RowIdResolver::IdField => RowIdResolver::IdField,
            RowIdResolver::Custom(f) => RowIdResolver::Custom(f.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_reads_field_without_renderer() {
        let column: Column<serde_json::Value, String> = Column::new("name", "Nama");
        let row = json!({ "id": 1, "name": "Budi" });
        assert_eq!(column.cell(&row, 0), Cell::Value(CellValue::from("Budi")));
    }

    #[test]
    fn test_renderer_is_authoritative_and_gets_index() {
        let column: Column<serde_json::Value, String> =
            Column::new("name", "Nama").render(|row: &serde_json::Value, index| {
                format!("{}. {}", index + 1, row["name"].as_str().unwrap_or(""))
            });
        let row = json!({ "id": 1, "name": "Budi" });
        assert_eq!(column.cell(&row, 2), Cell::Rendered("3. Budi".to_string()));
    }

    #[test]
    fn test_duplicate_keys() {
        let columns: Vec<Column<serde_json::Value, String>> = vec![
            Column::new("name", "Nama"),
            Column::new("region", "Wilayah"),
            Column::new("name", "Nama lagi"),
        ];
        assert_eq!(duplicate_keys(&columns), vec!["name".to_string()]);
    }

    #[test]
    fn test_row_id_resolver() {
        let row = json!({ "id": "u-1", "nik": "3171" });
        assert_eq!(RowIdResolver::default().resolve(&row), "u-1");
        let by_nik = RowIdResolver::custom(|row: &serde_json::Value| {
            row["nik"].as_str().unwrap_or_default().to_string()
        });
        assert_eq!(by_nik.resolve(&row), "3171");
    }
}
