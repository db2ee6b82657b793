//! Чекбоксы выбора строк: общий в заголовке и по одному в каждой строке
//!
//! Браузер переключает `<input>` сам, до того как выбор изменится. Если
//! страница отклонила запись, состояние хранилища не меняется и ре-рендера
//! нет, поэтому после каждого изменения DOM выравнивается по хранилищу.

use super::selection::CheckState;
use leptos::prelude::*;
use thaw::*;

fn apply_state(input: &web_sys::HtmlInputElement, state: CheckState) {
    input.set_checked(matches!(state, CheckState::Checked));
    input.set_indeterminate(matches!(state, CheckState::Indeterminate));
}

/// Чекбокс "выбрать все" в заголовке грида
///
/// Показывает три состояния: unchecked, checked, indeterminate.
/// `on_change(true)` выбирает все строки текущих данных, `false` снимает выбор.
#[component]
pub fn GridHeaderCheckbox(
    #[prop(into)]
    state: Signal<CheckState>,

    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        let state = state.get();
        if let Some(input) = checkbox_ref.get() {
            apply_state(&input, state);
        }
    });

    let handle_change = move |ev: leptos::ev::Event| {
        on_change.run(event_target_checked(&ev));
        if let Some(input) = checkbox_ref.get_untracked() {
            apply_state(&input, state.get_untracked());
        }
    };

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), CheckState::Checked)
                on:change=handle_change
            />
        </TableHeaderCell>
    }
}

/// Чекбокс выбора одной строки
///
/// `checked` читается из хранилища выбора заново после `on_toggle`.
#[component]
pub fn GridCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    let handle_change = move |_: leptos::ev::Event| {
        on_toggle.run(());
        if let Some(input) = checkbox_ref.get_untracked() {
            input.set_checked(checked.get_untracked());
        }
    };

    view! {
        <TableCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=handle_change
            />
        </TableCell>
    }
}
