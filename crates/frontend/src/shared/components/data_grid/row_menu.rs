//! Контекстное меню действий строки
//!
//! Положение меню решает грид (см. `action_menu`) до монтирования меню;
//! здесь только замер кнопки и отрисовка результата.

use super::action_menu::{Placement, RowAction, TriggerRect};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Клик по ним не считается внешним: открытое меню и кнопка любой строки
/// (она сама открывает или переключает меню)
const INSIDE_SELECTOR: &str = "[data-row-menu-open], .row-menu__trigger";

/// Границы элемента, получившего клик
pub fn trigger_rect(ev: &ev::MouseEvent) -> TriggerRect {
    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            TriggerRect {
                top: rect.top(),
                bottom: rect.bottom(),
                left: rect.left(),
                right: rect.right(),
            }
        })
        .unwrap_or_default()
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn is_inside_open_menu(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(INSIDE_SELECTOR).ok().flatten())
        .is_some()
}

/// Глобальный слушатель click, живёт только пока меню открыто
///
/// Слушатель висит на `window` и срабатывает после обработчика самого
/// элемента: клик, закрывающий меню, всё равно доходит до цели.
/// Drop подписки снимает слушатель.
pub struct OutsideClickSubscription {
    handle: Option<WindowListenerHandle>,
}

impl OutsideClickSubscription {
    pub fn subscribe(on_click: impl Fn(bool) + 'static) -> Self {
        let handle = window_event_listener(ev::click, move |ev: ev::MouseEvent| {
            on_click(is_inside_open_menu(&ev));
        });
        Self {
            handle: Some(handle),
        }
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
        }
    }
}

/// Кнопка "⋮" и выпадающее меню действий строки
#[component]
pub fn RowActionMenu(
    actions: Vec<RowAction>,

    /// Положение меню, если открыто именно оно
    placement: Option<Placement>,

    /// Кнопка видна, но не реагирует
    #[prop(optional)]
    disabled: bool,

    on_trigger: Callback<TriggerRect>,

    on_select: Callback<String>,
) -> impl IntoView {
    let is_open = placement.is_some();

    view! {
        <TableCell class="row-menu-cell">
            <div class="row-menu-anchor" data-row-menu-open=is_open.then_some("")>
                <button
                    type="button"
                    class="row-menu__trigger"
                    class:row-menu__trigger--active=is_open
                    disabled=disabled
                    title="Aksi"
                    on:click=move |ev: ev::MouseEvent| on_trigger.run(trigger_rect(&ev))
                >
                    {icon("more-vertical")}
                </button>
                {placement.map(|placement| view! {
                    <div class=placement.class() role="menu">
                        {actions
                            .into_iter()
                            .map(|action| {
                                let value = action.value.clone();
                                view! {
                                    <button
                                        type="button"
                                        role="menuitem"
                                        class="row-menu__item"
                                        class:row-menu__item--danger=action.danger
                                        on:click=move |_| on_select.run(value.clone())
                                    >
                                        {action.icon.map(icon)}
                                        <span>{action.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
        </TableCell>
    }
}
