//! Per-row action menu: which row's menu is open and on which side of its
//! trigger it opens.

use super::row::RowId;
use std::fmt;
use std::sync::Arc;

/// Estimated height of one menu item, px.
///
/// The menu is not mounted yet when the side is chosen, so its height is
/// estimated from the item count instead of measured.
pub const MENU_ITEM_HEIGHT: f64 = 40.0;
/// Estimated vertical padding and border of the menu, px.
pub const MENU_CHROME_PADDING: f64 = 16.0;

/// Screen-space bounds of a menu trigger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TriggerRect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
}

impl Placement {
    pub fn class(&self) -> &'static str {
        match self {
            Placement::Above => "row-menu row-menu--above",
            Placement::Below => "row-menu row-menu--below",
        }
    }
}

pub fn estimate_menu_height(action_count: usize) -> f64 {
    action_count as f64 * MENU_ITEM_HEIGHT + MENU_CHROME_PADDING
}

/// Opens below unless the space under the trigger is smaller than the
/// estimated menu height.
pub fn decide_placement(trigger: &TriggerRect, viewport_height: f64, action_count: usize) -> Placement {
    let space_below = viewport_height - trigger.bottom;
    if space_below < estimate_menu_height(action_count) {
        Placement::Above
    } else {
        Placement::Below
    }
}

/// One entry of a row's action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    /// Passed back to the page when chosen
    pub value: String,
    pub label: String,
    /// Icon name from `shared::icons`
    pub icon: Option<&'static str>,
    /// Destructive action, styled in red
    pub danger: bool,
}

impl RowAction {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
            danger: false,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

/// Actions offered for rows: one list for all, or computed per row.
pub enum RowActions<T> {
    Static(Vec<RowAction>),
    PerRow(Arc<dyn Fn(&T) -> Vec<RowAction> + Send + Sync>),
}

impl<T> RowActions<T> {
    pub fn per_row(actions: impl Fn(&T) -> Vec<RowAction> + Send + Sync + 'static) -> Self {
        RowActions::PerRow(Arc::new(actions))
    }

    /// Actions for `row`, computed on every call; an empty list hides the trigger.
    pub fn resolve(&self, row: &T) -> Vec<RowAction> {
        match self {
            RowActions::Static(actions) => actions.clone(),
            RowActions::PerRow(actions) => actions(row),
        }
    }
}

impl<T> Clone for RowActions<T> {
    fn clone(&self) -> Self {
        match self {
            RowActions::Static(actions) => RowActions::Static(actions.clone()),
            RowActions::PerRow(actions) => RowActions::PerRow(actions.clone()),
        }
    }
}

impl<T> fmt::Debug for RowActions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowActions::Static(actions) => f.debug_tuple("Static").field(actions).finish(),
            RowActions::PerRow(_) => f.write_str("PerRow(..)"),
        }
    }
}

impl<T> From<Vec<RowAction>> for RowActions<T> {
    fn from(actions: Vec<RowAction>) -> Self {
        RowActions::Static(actions)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open { row_id: RowId, placement: Placement },
}

/// The single menu slot of a grid. At most one row's menu is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionMenu {
    state: MenuState,
    disabled: bool,
}

impl ActionMenu {
    pub fn new(disabled: bool) -> Self {
        Self {
            state: MenuState::Closed,
            disabled,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disabling closes an open menu; triggers stay visible but inert.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.dismiss();
        }
    }

    pub fn open_row(&self) -> Option<&str> {
        match &self.state {
            MenuState::Open { row_id, .. } => Some(row_id.as_str()),
            MenuState::Closed => None,
        }
    }

    /// Placement of `row_id`'s menu when it is the open one.
    pub fn placement_for(&self, row_id: &str) -> Option<Placement> {
        match &self.state {
            MenuState::Open { row_id: open, placement } if open == row_id => Some(*placement),
            _ => None,
        }
    }

    /// Trigger click on `row_id`.
    ///
    /// Clicking the open row's trigger again closes it; clicking another row
    /// moves the single open menu there with a fresh placement.
    pub fn open_menu_for(
        &mut self,
        row_id: &str,
        trigger: &TriggerRect,
        viewport_height: f64,
        action_count: usize,
    ) {
        if self.disabled || action_count == 0 {
            return;
        }
        if self.open_row() == Some(row_id) {
            self.dismiss();
            return;
        }
        let placement = decide_placement(trigger, viewport_height, action_count);
        log::debug!("data grid menu open: row={} placement={:?}", row_id, placement);
        self.state = MenuState::Open {
            row_id: row_id.to_string(),
            placement,
        };
    }

    pub fn dismiss(&mut self) {
        if self.is_open() {
            log::debug!("data grid menu closed");
        }
        self.state = MenuState::Closed;
    }

    /// Pointer-down anywhere on the page while a menu is open.
    pub fn outside_pointer(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.dismiss();
        }
    }

    /// Hands the chosen action to the page, then closes the menu.
    pub fn invoke<T>(&mut self, row: &T, action_value: &str, dispatch: impl FnOnce(&T, &str)) {
        dispatch(row, action_value);
        self.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger_at(bottom: f64) -> TriggerRect {
        TriggerRect {
            top: bottom - 32.0,
            bottom,
            left: 900.0,
            right: 932.0,
        }
    }

    #[test]
    fn test_estimated_height() {
        assert_eq!(estimate_menu_height(3), 136.0);
        assert_eq!(estimate_menu_height(0), MENU_CHROME_PADDING);
    }

    #[test]
    fn test_placement_boundary() {
        let viewport = 800.0;
        let trigger = trigger_at(viewport - 30.0);
        assert_eq!(decide_placement(&trigger, viewport, 1), Placement::Above);

        // 2 items -> 96px needed, exactly 96px available
        let trigger = trigger_at(viewport - 96.0);
        assert_eq!(decide_placement(&trigger, viewport, 2), Placement::Below);
        let trigger = trigger_at(viewport - 95.0);
        assert_eq!(decide_placement(&trigger, viewport, 2), Placement::Above);
    }

    #[test]
    fn test_menu_exclusivity() {
        let mut menu = ActionMenu::new(false);
        menu.open_menu_for("a", &trigger_at(100.0), 800.0, 2);
        assert_eq!(menu.open_row(), Some("a"));

        menu.open_menu_for("b", &trigger_at(780.0), 800.0, 2);
        assert_eq!(menu.open_row(), Some("b"));
        assert_eq!(menu.placement_for("a"), None);
        assert_eq!(menu.placement_for("b"), Some(Placement::Above));
    }

    #[test]
    fn test_same_trigger_toggles_closed() {
        let mut menu = ActionMenu::new(false);
        menu.open_menu_for("a", &trigger_at(100.0), 800.0, 2);
        menu.open_menu_for("a", &trigger_at(790.0), 800.0, 2);
        assert_eq!(menu.state(), &MenuState::Closed);
    }

    #[test]
    fn test_outside_pointer_and_inside_pointer() {
        let mut menu = ActionMenu::new(false);
        menu.open_menu_for("a", &trigger_at(100.0), 800.0, 1);
        menu.outside_pointer(true);
        assert!(menu.is_open());
        menu.outside_pointer(false);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_invoke_dispatches_then_closes() {
        let mut menu = ActionMenu::new(false);
        menu.open_menu_for("a", &trigger_at(100.0), 800.0, 2);
        let mut seen = None;
        menu.invoke(&"row-a", "delete", |row, value| {
            seen = Some((row.to_string(), value.to_string()));
        });
        assert_eq!(seen, Some(("row-a".to_string(), "delete".to_string())));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_disabled_menu_is_inert() {
        let mut menu = ActionMenu::new(false);
        menu.open_menu_for("a", &trigger_at(100.0), 800.0, 2);
        menu.set_disabled(true);
        assert!(!menu.is_open());
        menu.open_menu_for("a", &trigger_at(100.0), 800.0, 2);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_no_actions_never_opens() {
        let mut menu = ActionMenu::new(false);
        menu.open_menu_for("a", &trigger_at(100.0), 800.0, 0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_per_row_actions_resolve_fresh() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let actions: RowActions<bool> = RowActions::per_row(move |locked: &bool| {
            counter.fetch_add(1, Ordering::SeqCst);
            let mut list = vec![RowAction::new("edit", "Ubah")];
            if !*locked {
                list.push(RowAction::new("delete", "Hapus").danger());
            }
            list
        });

        assert_eq!(actions.resolve(&true).len(), 1);
        assert_eq!(actions.resolve(&false).len(), 2);
        assert_eq!(actions.resolve(&false).len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
