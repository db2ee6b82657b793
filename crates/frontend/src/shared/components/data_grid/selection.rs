//! Row selection with a single, fixed owner.
//!
//! A grid either owns its selection (internal mode) or the page hands it a
//! set plus a setter (external mode). The owner is decided once when the store
//! is built; every later mutation goes to that owner and the two are never
//! merged.

use super::row::RowId;
use std::collections::HashSet;

/// Host-owned selection: a reader for the current set and a setter.
pub trait ExternalSelection {
    fn read(&self) -> HashSet<RowId>;
    fn write(&self, next: HashSet<RowId>);

    fn contains(&self, id: &str) -> bool {
        self.read().contains(id)
    }
}

/// `ExternalSelection` from a pair of closures.
#[cfg(test)]
pub struct HostSelection<R, W> {
    read: R,
    write: W,
}

#[cfg(test)]
impl<R, W> HostSelection<R, W>
where
    R: Fn() -> HashSet<RowId>,
    W: Fn(HashSet<RowId>),
{
    pub fn new(read: R, write: W) -> Self {
        Self { read, write }
    }
}

#[cfg(test)]
impl<R, W> ExternalSelection for HostSelection<R, W>
where
    R: Fn() -> HashSet<RowId>,
    W: Fn(HashSet<RowId>),
{
    fn read(&self) -> HashSet<RowId> {
        (self.read)()
    }

    fn write(&self, next: HashSet<RowId>) {
        (self.write)(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Internal,
    External,
}

enum Authority<E> {
    Internal(HashSet<RowId>),
    External(E),
}

pub struct SelectionStore<E> {
    authority: Authority<E>,
}

impl<E: ExternalSelection> SelectionStore<E> {
    /// Picks the owner for the lifetime of the grid: the host when it supplied
    /// both the set and the setter, otherwise a private set starting empty.
    pub fn resolve(external: Option<E>) -> Self {
        let authority = match external {
            Some(host) => Authority::External(host),
            None => Authority::Internal(HashSet::new()),
        };
        Self { authority }
    }

    pub fn mode(&self) -> SelectionMode {
        match self.authority {
            Authority::Internal(_) => SelectionMode::Internal,
            Authority::External(_) => SelectionMode::External,
        }
    }

    /// The effective selection, stale ids included.
    pub fn current(&self) -> HashSet<RowId> {
        match &self.authority {
            Authority::Internal(set) => set.clone(),
            Authority::External(host) => host.read(),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        match &self.authority {
            Authority::Internal(set) => set.contains(id),
            Authority::External(host) => host.contains(id),
        }
    }

    pub fn toggle_row(&mut self, id: &str) {
        let mut next = self.current();
        if !next.remove(id) {
            next.insert(id.to_string());
        }
        self.commit(next);
    }

    /// `true` selects exactly the rows of the current data (one page when the
    /// host paginates); `false` empties the selection.
    pub fn toggle_all(&mut self, checked: bool, visible_ids: &[RowId]) {
        let next = if checked {
            visible_ids.iter().cloned().collect()
        } else {
            HashSet::new()
        };
        self.commit(next);
    }

    /// Select-all indicator state, counted only over ids present in `visible_ids`.
    pub fn summary(&self, visible_ids: &[RowId]) -> SelectionSummary {
        let count = selected_in(&self.current(), visible_ids).len();
        SelectionSummary::from_counts(count, visible_ids.len())
    }

    fn commit(&mut self, next: HashSet<RowId>) {
        match &mut self.authority {
            Authority::Internal(set) => *set = next,
            Authority::External(host) => host.write(next),
        }
    }
}

/// Ids of `visible_ids` present in `selected`, in data order.
///
/// Stale ids (selected, but no longer in the data) are dropped. Pages use this
/// for bulk actions over a selection they own.
pub fn selected_in(selected: &HashSet<RowId>, visible_ids: &[RowId]) -> Vec<RowId> {
    visible_ids
        .iter()
        .filter(|id| selected.contains(*id))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    pub all_selected: bool,
    pub some_selected: bool,
}

impl SelectionSummary {
    pub fn from_counts(selected: usize, total: usize) -> Self {
        Self {
            all_selected: total > 0 && selected == total,
            some_selected: selected > 0 && selected < total,
        }
    }

    pub fn check_state(&self) -> CheckState {
        if self.all_selected {
            CheckState::Checked
        } else if self.some_selected {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

/// Visual state of the "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Stand-in for the host page: what the grid sees comes only from `read`.
    struct Host {
        set: Rc<RefCell<HashSet<RowId>>>,
        writes: Rc<Cell<usize>>,
    }

    impl ExternalSelection for Host {
        fn read(&self) -> HashSet<RowId> {
            self.set.borrow().clone()
        }

        fn write(&self, next: HashSet<RowId>) {
            self.writes.set(self.writes.get() + 1);
            *self.set.borrow_mut() = next;
        }
    }

    fn ids(values: &[&str]) -> Vec<RowId> {
        values.iter().map(|v| v.to_string()).collect()
    }

    type InternalStore = SelectionStore<HostSelection<fn() -> HashSet<RowId>, fn(HashSet<RowId>)>>;

    #[test]
    fn test_internal_mode_starts_empty() {
        let store = InternalStore::resolve(None);
        assert_eq!(store.mode(), SelectionMode::Internal);
        assert!(store.current().is_empty());
    }

    #[test]
    fn test_select_all_then_deselect_one() {
        let data = ids(&["1", "2", "3"]);
        let mut store = InternalStore::resolve(None);

        store.toggle_all(true, &data);
        assert_eq!(
            store.summary(&data),
            SelectionSummary { all_selected: true, some_selected: false }
        );

        store.toggle_row("1");
        assert_eq!(
            store.summary(&data),
            SelectionSummary { all_selected: false, some_selected: true }
        );
        assert!(!store.is_selected("1"));
        assert!(store.is_selected("2"));
    }

    #[test]
    fn test_indeterminate_law() {
        let data = ids(&["a", "b", "c", "d"]);
        let mut store = InternalStore::resolve(None);
        assert_eq!(store.summary(&data).check_state(), CheckState::Unchecked);

        store.toggle_row("c");
        let summary = store.summary(&data);
        assert!(summary.some_selected && !summary.all_selected);
        assert_eq!(summary.check_state(), CheckState::Indeterminate);

        store.toggle_all(true, &data);
        assert_eq!(store.summary(&data).check_state(), CheckState::Checked);

        store.toggle_all(false, &data);
        assert_eq!(store.summary(&data), SelectionSummary::default());
    }

    #[test]
    fn test_empty_data_is_never_all_selected() {
        let store = InternalStore::resolve(None);
        assert_eq!(store.summary(&[]), SelectionSummary::default());
    }

    #[test]
    fn test_stale_ids_are_ignored_by_summary() {
        let mut store = InternalStore::resolve(None);
        store.toggle_all(true, &ids(&["1", "2"]));

        let reloaded = ids(&["2", "5"]);
        assert_eq!(
            store.summary(&reloaded),
            SelectionSummary { all_selected: false, some_selected: true }
        );
        assert_eq!(selected_in(&store.current(), &reloaded), ids(&["2"]));

        store.toggle_row("5");
        assert_eq!(store.summary(&reloaded).check_state(), CheckState::Checked);
    }

    #[test]
    fn test_external_mode_routes_every_mutation_to_host() {
        let set = Rc::new(RefCell::new(HashSet::new()));
        let writes = Rc::new(Cell::new(0));
        let mut store = SelectionStore::resolve(Some(Host {
            set: set.clone(),
            writes: writes.clone(),
        }));
        assert_eq!(store.mode(), SelectionMode::External);

        store.toggle_row("7");
        assert_eq!(writes.get(), 1);
        assert!(set.borrow().contains("7"));
        assert_eq!(store.current(), *set.borrow());

        // The host changes its set on its own; the grid follows.
        set.borrow_mut().clear();
        assert!(!store.is_selected("7"));

        store.toggle_all(false, &[]);
        assert_eq!(writes.get(), 2);
    }

    #[test]
    fn test_external_mode_never_diverges_from_host() {
        let host_set: Rc<RefCell<HashSet<RowId>>> = Rc::new(RefCell::new(HashSet::new()));
        let reader = host_set.clone();
        let requested = Rc::new(RefCell::new(Vec::new()));
        let recorder = requested.clone();
        // A host that records requests but refuses to apply them.
        let mut store = SelectionStore::resolve(Some(HostSelection::new(
            move || reader.borrow().clone(),
            move |next: HashSet<RowId>| recorder.borrow_mut().push(next),
        )));

        store.toggle_row("1");
        assert_eq!(requested.borrow().len(), 1);
        assert!(requested.borrow()[0].contains("1"));
        assert!(!store.is_selected("1"));
        assert!(store.current().is_empty());
    }
}
