//! Ячейка заголовка грида с трёхпозиционной сортировкой
//!
//! # Примеры
//!
//! ```rust,ignore
//! <GridHeaderCell
//!     label="Nama".to_string()
//!     sort_key="full_name".to_string()
//!     indicator=Signal::derive(move || Some(sort.with(|s| s.indicator_for("full_name"))))
//!     on_sort=Callback::new(move |key: String| sort.update(|s| s.request_sort(&key)))
//! />
//! ```

use super::sort::SortIndicator;
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка грида
///
/// Сортируемая колонка (`indicator` = `Some`) показывает ⇅/▲/▼ и передаёт
/// клик в `on_sort`; несортируемая выводит только текст.
#[component]
pub fn GridHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ колонки
    #[prop(into)]
    sort_key: String,

    /// Индикатор сортировки; `None` для несортируемой колонки
    #[prop(into)]
    indicator: Signal<Option<SortIndicator>>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let is_sortable = indicator.get_untracked().is_some();
    let header_style = if is_sortable { "cursor: pointer;" } else { "cursor: default;" };

    let handle_click = move |_| {
        if is_sortable {
            on_sort.run(sort_key.clone());
        }
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                class:table__sortable-header--static=!is_sortable
                style=header_style
                on:click=handle_click
            >
                {label}
                {move || indicator.get().map(|ind| view! {
                    <span class=ind.class()>{ind.glyph()}</span>
                })}
            </div>
        </TableHeaderCell>
    }
}
