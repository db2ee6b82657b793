use crate::domain::census::ui::list::CensusListPage;
use crate::domain::pindah_sambung::ui::list::TransferRequestsPage;
use crate::shared::icons::icon;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;
use std::collections::HashMap;

/// Страницы приложения; ключ хранится в `?active=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Users,
    Census,
    PindahSambung,
}

impl ActivePage {
    pub const ALL: [ActivePage; 3] = [Self::Users, Self::Census, Self::PindahSambung];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Census => "census",
            Self::PindahSambung => "pindah-sambung",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Users => "Pengguna",
            Self::Census => "Sensus",
            Self::PindahSambung => "Pindah Sambung",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Census => "census",
            Self::PindahSambung => "transfer",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }

    /// Page named by the `active` query parameter, users list otherwise.
    pub fn from_query(search: &str) -> Self {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params
            .get("active")
            .and_then(|key| Self::from_key(key))
            .unwrap_or(Self::Users)
    }
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Keeps `?active=` in sync without adding history entries.
fn sync_url(page: ActivePage) {
    let query = serde_qs::to_string(&HashMap::from([("active", page.key())])).unwrap_or_default();
    let new_url = format!("?{}", query);
    if current_search() == new_url {
        return;
    }
    if let Some(w) = web_sys::window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}

#[component]
fn Sidebar(active: RwSignal<ActivePage>) -> impl IntoView {
    view! {
        <nav class="sidebar">
            {ActivePage::ALL
                .into_iter()
                .map(|page| view! {
                    <button
                        type="button"
                        class="sidebar__item"
                        class:sidebar__item--active=move || active.get() == page
                        on:click=move |_| active.set(page)
                    >
                        {icon(page.icon_name())}
                        <span>{page.title()}</span>
                    </button>
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let active = RwSignal::new(ActivePage::from_query(&current_search()));

    Effect::new(move |_| sync_url(active.get()));

    view! {
        <div class="app-shell">
            <Sidebar active=active />
            <main class="app-shell__center">
                {move || match active.get() {
                    ActivePage::Users => view! { <UsersListPage /> }.into_any(),
                    ActivePage::Census => view! { <CensusListPage /> }.into_any(),
                    ActivePage::PindahSambung => view! { <TransferRequestsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_page_from_query() {
        assert_eq!(ActivePage::from_query("?active=census"), ActivePage::Census);
        assert_eq!(ActivePage::from_query("active=pindah-sambung"), ActivePage::PindahSambung);
        assert_eq!(ActivePage::from_query("?active=unknown"), ActivePage::Users);
        assert_eq!(ActivePage::from_query(""), ActivePage::Users);
    }

    #[test]
    fn test_keys_round_trip() {
        for page in ActivePage::ALL {
            assert_eq!(ActivePage::from_key(page.key()), Some(page));
        }
    }
}
