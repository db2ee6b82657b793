use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

use crate::shared::components::data_grid::{
    selected_in, CellValue, DataGrid, GridColumn, GridRow, RowAction, RowActions, RowId,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::system::users::api;

impl GridRow for User {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "username" => self.username.to_lowercase().into(),
            "full_name" => self.full_name.as_deref().map(str::to_lowercase).into(),
            "email" => self.email.as_deref().map(str::to_lowercase).into(),
            "role" => self.role.code().into(),
            "region" => self.region.clone().into(),
            "is_active" => self.is_active.into(),
            "created_at" => self.created_at.as_str().into(),
            "last_login_at" => self.last_login_at.clone().into(),
            _ => CellValue::Empty,
        }
    }
}

fn user_columns() -> Vec<GridColumn<User>> {
    vec![
        GridColumn::new("username", "Username")
            .sortable()
            .emphasize()
            .render(|u: &User, _| u.username.clone().into_any()),
        GridColumn::new("full_name", "Nama Lengkap")
            .sortable()
            .render(|u: &User, _| u.full_name.clone().unwrap_or_default().into_any()),
        GridColumn::new("email", "Email")
            .sortable()
            .render(|u: &User, _| u.email.clone().unwrap_or_default().into_any()),
        GridColumn::new("role", "Peran").sortable().render(|u: &User, _| {
            let class = if u.is_admin() { "badge badge--warning" } else { "badge badge--neutral" };
            view! { <span class=class>{u.role.display_name()}</span> }.into_any()
        }),
        GridColumn::new("region", "Wilayah").sortable(),
        GridColumn::new("is_active", "Status").sortable().render(|u: &User, _| {
            if u.is_active {
                view! { <span class="badge badge--success">"Aktif"</span> }.into_any()
            } else {
                view! { <span class="badge badge--error">"Diblokir"</span> }.into_any()
            }
        }),
        GridColumn::new("last_login_at", "Login Terakhir").sortable().render(|u: &User, _| {
            u.last_login_at
                .as_deref()
                .map(format_datetime)
                .unwrap_or_else(|| "-".to_string())
                .into_any()
        }),
    ]
}

/// Admin accounts cannot be deleted from the list
fn user_actions(user: &User) -> Vec<RowAction> {
    let mut actions = vec![if user.is_active {
        RowAction::new("deactivate", "Blokir").icon("power")
    } else {
        RowAction::new("activate", "Aktifkan").icon("check")
    }];
    if !user.is_admin() {
        actions.push(RowAction::new("delete", "Hapus").icon("trash").danger());
    }
    actions
}

/// Ids eligible for bulk delete, in list order
fn deletable_ids(users: &[User]) -> Vec<RowId> {
    users
        .iter()
        .filter(|u| !u.is_admin())
        .map(|u| u.id.clone())
        .collect()
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    // Выбор хранится на странице: после массового удаления он сбрасывается
    let selected: RwSignal<HashSet<RowId>> = RwSignal::new(HashSet::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (busy, set_busy) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => users.set(data),
                Err(e) => {
                    log::error!("Failed to load users: {}", e);
                    set_error.set(Some(format!("Gagal memuat pengguna: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let on_row_action = Callback::new(move |(user, action): (User, String)| {
        set_busy.set(true);
        spawn_local(async move {
            let result = match action.as_str() {
                "activate" => api::set_active(&user.id, true).await,
                "deactivate" => api::set_active(&user.id, false).await,
                "delete" => api::delete_users(vec![user.id.clone()]).await,
                other => {
                    log::warn!("Unknown user action: {}", other);
                    Ok(())
                }
            };
            set_busy.set(false);
            match result {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("User action {} failed: {}", action, e);
                    set_error.set(Some(format!("Aksi gagal: {}", e)));
                }
            }
        });
    });

    // Только id текущих данных: устаревшие id из выбора не удаляются
    let selected_ids = Signal::derive(move || {
        selected.with(|chosen| users.with(|list| selected_in(chosen, &deletable_ids(list))))
    });

    let delete_selected = move |_| {
        let ids = selected_ids.get_untracked();
        if ids.is_empty() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::delete_users(ids).await {
                Ok(()) => {
                    selected.set(HashSet::new());
                    load_data();
                }
                Err(e) => {
                    log::error!("Bulk delete failed: {}", e);
                    set_error.set(Some(format!("Gagal menghapus: {}", e)));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">"Pengguna"</h1>
                    <Badge>{move || users.with(|u| u.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=delete_selected
                        disabled=Signal::derive(move || busy.get() || selected_ids.with(|ids| ids.is_empty()))
                    >
                        {icon("trash")}
                        {move || format!(" Hapus terpilih ({})", selected_ids.with(|ids| ids.len()))}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Memuat..." } else { " Muat ulang" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <DataGrid
                    data=users
                    columns=user_columns()
                    selected_rows=selected
                    set_selected_rows=Callback::new(move |next: HashSet<RowId>| selected.set(next))
                    row_actions=RowActions::per_row(user_actions)
                    on_row_action=on_row_action
                    disabled=busy
                    table_id="sys-users-table"
                    empty_message="Belum ada pengguna"
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserRole;

    fn user(id: &str, role: UserRole, is_active: bool) -> User {
        User {
            id: id.to_string(),
            username: format!("User-{}", id),
            email: None,
            full_name: None,
            role,
            region: None,
            is_active,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_admins_cannot_be_deleted() {
        let values: Vec<String> = user_actions(&user("1", UserRole::Admin, true))
            .into_iter()
            .map(|a| a.value)
            .collect();
        assert_eq!(values, vec!["deactivate"]);
    }

    #[test]
    fn test_blocked_user_offers_activation() {
        let values: Vec<String> = user_actions(&user("2", UserRole::Operator, false))
            .into_iter()
            .map(|a| a.value)
            .collect();
        assert_eq!(values, vec!["activate", "delete"]);
    }

    #[test]
    fn test_bulk_delete_skips_admins_and_stale_ids() {
        let list = vec![
            user("1", UserRole::Admin, true),
            user("2", UserRole::Operator, true),
            user("3", UserRole::Viewer, false),
        ];
        let chosen: HashSet<RowId> = ["1", "3", "gone"].iter().map(|id| id.to_string()).collect();
        assert_eq!(selected_in(&chosen, &deletable_ids(&list)), vec!["3".to_string()]);
    }

    #[test]
    fn test_grid_fields() {
        let u = user("3", UserRole::Viewer, true);
        assert_eq!(u.row_id(), Some("3".to_string()));
        assert_eq!(u.field("username"), CellValue::from("user-3"));
        assert_eq!(u.field("role"), CellValue::from("viewer"));
        assert_eq!(u.field("email"), CellValue::Empty);
        assert_eq!(u.field("is_active"), CellValue::Bool(true));
    }
}
