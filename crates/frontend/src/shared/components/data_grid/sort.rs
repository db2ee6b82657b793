//! Tri-state column sorting.
//!
//! Clicking a header cycles its direction `Ascending -> Descending -> None`;
//! clicking another header always starts over at `Ascending`. With `None` the
//! grid shows rows in the order the page supplied them.

use super::row::GridRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    /// No active sort: the page's original order
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    /// Kept while `direction` is `None` so the header stays tied to the column
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the tri-state cycle for `key`.
    pub fn request_sort(&mut self, key: &str) {
        if self.key.as_deref() != Some(key) {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        } else {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::None,
                SortDirection::None => SortDirection::Ascending,
            };
        }
        log::debug!("data grid sort: {:?} {:?}", self.key, self.direction);
    }

    /// Key and direction of the sort that reorders rows, if any.
    pub fn active(&self) -> Option<(&str, SortDirection)> {
        match (&self.key, self.direction) {
            (_, SortDirection::None) | (None, _) => None,
            (Some(key), direction) => Some((key.as_str(), direction)),
        }
    }

    pub fn indicator_for(&self, key: &str) -> SortIndicator {
        if self.key.as_deref() != Some(key) {
            return SortIndicator::Neutral;
        }
        match self.direction {
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
            SortDirection::None => SortIndicator::Neutral,
        }
    }
}

/// Header sort marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Neutral => " ⇅",
            SortIndicator::Ascending => " ▲",
            SortIndicator::Descending => " ▼",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            SortIndicator::Neutral => "table__sort-indicator",
            _ => "table__sort-indicator table__sort-indicator--active",
        }
    }
}

/// Positions of `data` in display order.
///
/// The input is never touched; a fresh index vector is returned. The sort is
/// stable over the total order of `CellValue::compare`, so equal values keep
/// their input order.
pub fn sorted_order<T: GridRow>(data: &[T], sort: &SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    let Some((key, direction)) = sort.active() else {
        return order;
    };

    order.sort_by(|&a, &b| {
        let cmp = data[a].field(key).compare(&data[b].field(key));
        if direction == SortDirection::Descending {
            cmp.reverse()
        } else {
            cmp
        }
    });
    order
}
