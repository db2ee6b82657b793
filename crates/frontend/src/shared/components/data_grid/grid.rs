//! Универсальный грид данных для страниц-списков
//!
//! # Примеры
//!
//! ```rust,ignore
//! let columns = vec![
//!     GridColumn::<User>::new("username", "Username").sortable().emphasize(),
//!     GridColumn::new("email", "Email").sortable(),
//!     GridColumn::new("role", "Peran").render(|u: &User, _| u.role.display_name().into_any()),
//! ];
//!
//! <DataGrid
//!     data=users
//!     columns=columns
//!     selected_rows=selected
//!     set_selected_rows=Callback::new(move |next| selected.set(next))
//!     row_actions=RowActions::Static(vec![RowAction::new("edit", "Ubah")])
//!     on_row_action=Callback::new(move |(user, action): (User, String)| handle(user, action))
//! />
//! ```

use super::action_menu::{ActionMenu, RowActions, TriggerRect};
use super::checkbox::{GridCellCheckbox, GridHeaderCheckbox};
use super::column::{duplicate_keys, Cell, Column, RowIdResolver};
use super::header_cell::GridHeaderCell;
use super::pipeline::{compose, row_cells, GridSpec};
use super::row::{GridRow, RowId};
use super::row_menu::{viewport_height, OutsideClickSubscription, RowActionMenu};
use super::selection::{CheckState, ExternalSelection, SelectionStore};
use super::sort::SortState;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Колонка грида; renderer возвращает Leptos view
pub type GridColumn<T> = Column<T, AnyView>;

/// Выбор, которым владеет страница: сигнал и сеттер
#[derive(Clone, Copy)]
pub struct SignalSelection {
    selected: Signal<HashSet<RowId>>,
    set_selected: Callback<HashSet<RowId>>,
}

impl ExternalSelection for SignalSelection {
    fn read(&self) -> HashSet<RowId> {
        self.selected.get()
    }

    fn write(&self, next: HashSet<RowId>) {
        self.set_selected.run(next);
    }

    fn contains(&self, id: &str) -> bool {
        self.selected.with(|set| set.contains(id))
    }
}

/// Отмечена ли строка: всегда по текущему владельцу выбора
fn row_checked(selection: RwSignal<SelectionStore<SignalSelection>>, id: RowId) -> Signal<bool> {
    Signal::derive(move || selection.with(|s| s.is_selected(&id)))
}

struct GridConfig<T> {
    columns: Vec<GridColumn<T>>,
    get_row_id: RowIdResolver<T>,
    row_actions: Option<RowActions<T>>,
}

impl<T> GridConfig<T> {
    fn spec(&self) -> GridSpec<'_, T, AnyView> {
        GridSpec {
            columns: &self.columns,
            get_row_id: &self.get_row_id,
            row_actions: self.row_actions.as_ref(),
        }
    }
}

/// Грид с сортировкой, выбором строк и меню действий
///
/// Колонки, идентификатор строки и действия фиксируются при монтировании.
/// Выбором владеет страница, если переданы и `selected_rows`, и
/// `set_selected_rows`; иначе грид. Владелец выбирается один раз.
#[component]
pub fn DataGrid<T>(
    /// Строки текущей страницы
    #[prop(into)]
    data: Signal<Vec<T>>,

    columns: Vec<GridColumn<T>>,

    /// Идентификатор строки; по умолчанию поле `id`
    #[prop(optional)]
    get_row_id: Option<RowIdResolver<T>>,

    #[prop(optional, default = true)]
    selectable: bool,

    #[prop(optional, into)]
    selected_rows: Option<Signal<HashSet<RowId>>>,

    #[prop(optional)]
    set_selected_rows: Option<Callback<HashSet<RowId>>>,

    /// Без действий колонка меню не выводится
    #[prop(optional)]
    row_actions: Option<RowActions<T>>,

    /// (строка, value выбранного действия)
    #[prop(optional)]
    on_row_action: Option<Callback<(T, String)>>,

    /// Кнопки меню видны, но не нажимаются
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,

    #[prop(optional, into)]
    empty_message: Option<String>,

    #[prop(optional, into)]
    table_id: Option<String>,
) -> impl IntoView
where
    T: GridRow + Clone + Send + Sync + 'static,
{
    let duplicates = duplicate_keys(&columns);
    if !duplicates.is_empty() {
        log::warn!("data grid: duplicate column keys {:?}", duplicates);
    }

    let external = match (selected_rows, set_selected_rows) {
        (Some(selected), Some(set_selected)) => Some(SignalSelection {
            selected,
            set_selected,
        }),
        (None, None) => None,
        _ => {
            log::warn!("data grid: selected_rows and set_selected_rows go together; using own selection");
            None
        }
    };

    let header_labels: Vec<(String, String)> = columns
        .iter()
        .map(|column| (column.key.clone(), column.header.clone()))
        .collect();
    let emphasized: Vec<bool> = columns.iter().map(|column| column.emphasize).collect();
    let has_action_column = row_actions.is_some();

    let config = StoredValue::new(GridConfig {
        columns,
        get_row_id: get_row_id.unwrap_or_default(),
        row_actions,
    });
    let sort = RwSignal::new(SortState::new());
    let selection = RwSignal::new(SelectionStore::resolve(external));
    log::debug!("data grid selection: {:?}", selection.with_untracked(|s| s.mode()));
    let menu = RwSignal::new(ActionMenu::new(disabled.get_untracked().unwrap_or(false)));

    Effect::new(move |_| {
        let is_disabled = disabled.get().unwrap_or(false);
        if menu.with_untracked(|m| m.is_disabled()) != is_disabled {
            menu.update(|m| m.set_disabled(is_disabled));
        }
    });

    // Слушатель click на window существует только пока меню открыто;
    // при закрытии или размонтировании подписка удаляется (Drop)
    let outside_click = StoredValue::new_local(None::<OutsideClickSubscription>);
    Effect::new(move |_| {
        let is_open = menu.with(|m| m.is_open());
        outside_click.update_value(|subscription| {
            if !is_open {
                *subscription = None;
            } else if subscription.is_none() {
                *subscription = Some(OutsideClickSubscription::subscribe(move |inside| {
                    menu.update(|m| m.outside_pointer(inside));
                }));
            }
        });
    });

    let layout = Memo::new(move |_| {
        data.with(|rows| {
            sort.with(|sort| {
                selection.with(|store| {
                    menu.with(|menu| {
                        config.with_value(|cfg| {
                            compose(&cfg.spec(), rows, sort, selectable.then_some(store), menu)
                        })
                    })
                })
            })
        })
    });

    let on_sort = Callback::new(move |key: String| sort.update(|s| s.request_sort(&key)));

    let on_toggle_all = Callback::new(move |checked: bool| {
        let ids = layout.with_untracked(|l| l.row_ids());
        selection.update(|s| s.toggle_all(checked, &ids));
    });

    let toggle_row = move |id: RowId| selection.update(|s| s.toggle_row(&id));

    let open_menu = move |row_id: RowId, source_index: usize, trigger: TriggerRect| {
        // Список действий вычисляется заново при каждом открытии
        let action_count = data.with_untracked(|rows| {
            rows.get(source_index)
                .and_then(|row| {
                    config.with_value(|cfg| cfg.row_actions.as_ref().map(|a| a.resolve(row).len()))
                })
                .unwrap_or(0)
        });
        let viewport = viewport_height();
        menu.update(|m| m.open_menu_for(&row_id, &trigger, viewport, action_count));
    };

    let select_action = move |source_index: usize, value: String| {
        let Some(row) = data.with_untracked(|rows| rows.get(source_index).cloned()) else {
            return;
        };
        // Колбэк страницы вызывается без блокировки сигнала меню
        let mut next = menu.get_untracked();
        next.invoke(&row, &value, |row, value| {
            if let Some(on_row_action) = on_row_action {
                on_row_action.run((row.clone(), value.to_string()));
            }
        });
        menu.set(next);
    };

    let table_id = table_id.unwrap_or_else(|| "data-grid".to_string());
    let empty_message = empty_message.unwrap_or_else(|| "Tidak ada data".to_string());

    view! {
        <div class="table-wrapper">
            <Table attr:id=table_id attr:style="width: 100%;" class="data-grid">
                <TableHeader>
                    <TableRow>
                        {selectable.then(|| view! {
                            <GridHeaderCheckbox
                                state=Signal::derive(move || {
                                    layout.with(|l| l.select_all.unwrap_or(CheckState::Unchecked))
                                })
                                on_change=on_toggle_all
                            />
                        })}
                        {header_labels
                            .into_iter()
                            .enumerate()
                            .map(|(i, (key, label))| {
                                let indicator = Signal::derive(move || {
                                    layout.with(|l| l.header.get(i).and_then(|h| h.indicator))
                                });
                                view! {
                                    <GridHeaderCell
                                        label=label
                                        sort_key=key
                                        indicator=indicator
                                        on_sort=on_sort
                                    />
                                }
                            })
                            .collect_view()}
                        {has_action_column.then(|| view! {
                            <TableHeaderCell resizable=false min_width=48.0>
                            </TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {move || {
                    let empty_message = empty_message.clone();
                    layout.with(|l| {
                        if l.is_empty() {
                            let colspan = l.span().to_string();
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=colspan>
                                        <div class="data-grid__empty">{empty_message.clone()}</div>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }

                        let actions_disabled = l.actions_disabled;
                        data.with(|rows| {
                            config.with_value(|cfg| {
                                l.rows
                                    .iter()
                                    .map(|body_row| {
                                        let cells = row_cells(&cfg.columns, rows, body_row)
                                            .into_iter()
                                            .zip(emphasized.iter().copied())
                                            .map(|(cell, emphasize)| {
                                                let content = match cell {
                                                    Cell::Rendered(view) => view,
                                                    Cell::Value(value) => value.to_string().into_any(),
                                                };
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <span class:data-grid__cell--emphasize=emphasize>
                                                                {content}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view();

                                        let id_for_toggle = body_row.id.clone();
                                        let id_for_menu = body_row.id.clone();
                                        let source_index = body_row.source_index;
                                        let is_selected = body_row.checked.unwrap_or(false);

                                        let checkbox = body_row.checked.map(|_| view! {
                                            <GridCellCheckbox
                                                checked=row_checked(selection, body_row.id.clone())
                                                on_toggle=Callback::new(move |_| toggle_row(id_for_toggle.clone()))
                                            />
                                        });

                                        let menu_cell = has_action_column.then(|| {
                                            if body_row.actions.is_empty() {
                                                view! { <TableCell>""</TableCell> }.into_any()
                                            } else {
                                                view! {
                                                    <RowActionMenu
                                                        actions=body_row.actions.clone()
                                                        placement=body_row.menu
                                                        disabled=actions_disabled
                                                        on_trigger=Callback::new(move |rect: TriggerRect| {
                                                            open_menu(id_for_menu.clone(), source_index, rect)
                                                        })
                                                        on_select=Callback::new(move |value: String| {
                                                            select_action(source_index, value)
                                                        })
                                                    />
                                                }
                                                .into_any()
                                            }
                                        });

                                        view! {
                                            <TableRow class:table__row--selected=is_selected>
                                                {checkbox}
                                                {cells}
                                                {menu_cell}
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            })
                        })
                    })
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Страница, которая запоминает запросы, но не меняет свой набор
    fn refusing_page(
        set: RwSignal<HashSet<RowId>>,
        requests: RwSignal<usize>,
    ) -> RwSignal<SelectionStore<SignalSelection>> {
        let host = SignalSelection {
            selected: set.into(),
            set_selected: Callback::new(move |_: HashSet<RowId>| requests.update(|n| *n += 1)),
        };
        RwSignal::new(SelectionStore::resolve(Some(host)))
    }

    fn ids(values: &[&str]) -> Vec<RowId> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_row_checkbox_stays_unchecked_when_page_refuses() {
        let set = RwSignal::new(HashSet::new());
        let requests = RwSignal::new(0);
        let selection = refusing_page(set, requests);
        let checked = row_checked(selection, "1".to_string());

        selection.update(|s| s.toggle_row("1"));

        assert_eq!(requests.get_untracked(), 1);
        assert!(!checked.get_untracked());
    }

    #[test]
    fn test_row_checkbox_follows_page_set() {
        let set = RwSignal::new(HashSet::new());
        let selection = refusing_page(set, RwSignal::new(0));
        let checked = row_checked(selection, "2".to_string());
        assert!(!checked.get_untracked());

        set.set(ids(&["2"]).into_iter().collect());
        assert!(checked.get_untracked());
    }

    #[test]
    fn test_select_all_stays_unchecked_when_page_refuses() {
        let set = RwSignal::new(HashSet::new());
        let requests = RwSignal::new(0);
        let selection = refusing_page(set, requests);
        let visible = ids(&["1", "2"]);

        selection.update(|s| s.toggle_all(true, &visible));

        assert_eq!(requests.get_untracked(), 1);
        let state = selection.with_untracked(|s| s.summary(&visible).check_state());
        assert_eq!(state, CheckState::Unchecked);
    }
}
