//! Row field access and identity for the data grid.

use std::cmp::Ordering;
use std::fmt;

/// Stable identity of a row, independent of its position in the current view.
pub type RowId = String;

/// A raw field value read from a row by column key.
///
/// Values are displayed as-is; the owning page is responsible for making them
/// display-ready (dates formatted, enums labelled) or for supplying a renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Total ordering used by the sort.
    ///
    /// Kinds rank `Empty < Bool < number < Text`, so a mixed column groups by
    /// kind instead of interleaving. `Int` and `Float` compare numerically and
    /// NaN sorts after every other number.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Int(_) | CellValue::Float(_), CellValue::Int(_) | CellValue::Float(_)) => {
                compare_numbers(self.as_f64(), other.as_f64())
            }
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            CellValue::Int(v) => *v as f64,
            CellValue::Float(v) => *v,
            _ => f64::NAN,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// Trait for record types shown in the data grid.
pub trait GridRow {
    /// Value of the field named `key`; unknown keys yield `CellValue::Empty`.
    fn field(&self, key: &str) -> CellValue;

    /// Default row identity: the field literally named `id`.
    fn row_id(&self) -> Option<RowId> {
        match self.field("id") {
            CellValue::Empty => None,
            value => Some(value.to_string()),
        }
    }
}

impl GridRow for serde_json::Value {
    fn field(&self, key: &str) -> CellValue {
        match self.get(key) {
            None | Some(serde_json::Value::Null) => CellValue::Empty,
            Some(serde_json::Value::Bool(v)) => CellValue::Bool(*v),
            Some(serde_json::Value::Number(n)) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map(CellValue::Float).unwrap_or(CellValue::Empty),
            },
            Some(serde_json::Value::String(s)) => CellValue::Text(s.clone()),
            Some(other) => CellValue::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compare_same_kind() {
        let a = CellValue::from("A");
        let b = CellValue::from("B");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(CellValue::Int(3).compare(&CellValue::Float(2.5)), Ordering::Greater);
        assert_eq!(CellValue::Empty.compare(&CellValue::Int(0)), Ordering::Less);
    }

    #[test]
    fn test_compare_mixed_kinds_by_rank() {
        assert_eq!(CellValue::Int(1).compare(&CellValue::from("1")), Ordering::Less);
        assert_eq!(CellValue::from("a").compare(&CellValue::Float(9.0)), Ordering::Greater);
        assert_eq!(CellValue::Bool(true).compare(&CellValue::Int(0)), Ordering::Less);
    }

    #[test]
    fn test_nan_sorts_after_numbers() {
        let nan = CellValue::Float(f64::NAN);
        assert_eq!(nan.compare(&CellValue::Float(1.0)), Ordering::Greater);
        assert_eq!(CellValue::Int(i64::MAX).compare(&nan), Ordering::Less);
        assert_eq!(nan.compare(&CellValue::Float(f64::NAN)), Ordering::Equal);
        assert_eq!(nan.compare(&CellValue::from("x")), Ordering::Less);
    }

    #[test]
    fn test_json_row_fields_and_default_id() {
        let row = json!({ "id": 7, "name": "Budi", "score": 8.5, "note": null });
        assert_eq!(row.field("name"), CellValue::from("Budi"));
        assert_eq!(row.field("score"), CellValue::Float(8.5));
        assert_eq!(row.field("note"), CellValue::Empty);
        assert_eq!(row.field("missing"), CellValue::Empty);
        assert_eq!(row.row_id(), Some("7".to_string()));
        assert_eq!(json!({ "name": "x" }).row_id(), None);
    }
}
