use contracts::domain::pindah_sambung::{TransferRequest, TransferStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::pindah_sambung::api;
use crate::shared::components::data_grid::{
    CellValue, DataGrid, GridColumn, GridRow, RowAction, RowActions,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

impl GridRow for TransferRequest {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "member_name" => self.member_name.to_lowercase().into(),
            "origin" => self.origin.as_str().into(),
            "destination" => self.destination.as_str().into(),
            "reason" => self.reason.clone().into(),
            "status" => self.status.display_name().into(),
            "requested_at" => self.requested_at.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

fn transfer_columns() -> Vec<GridColumn<TransferRequest>> {
    vec![
        GridColumn::new("requested_at", "Diajukan")
            .sortable()
            .render(|r: &TransferRequest, _| format_datetime(&r.requested_at).into_any()),
        GridColumn::new("member_name", "Anggota")
            .sortable()
            .emphasize()
            .render(|r: &TransferRequest, _| r.member_name.clone().into_any()),
        GridColumn::new("origin", "Asal").sortable(),
        GridColumn::new("destination", "Tujuan").sortable(),
        GridColumn::new("reason", "Alasan"),
        GridColumn::new("status", "Status").sortable().render(|r: &TransferRequest, _| {
            let class = match r.status {
                TransferStatus::Pending => "badge badge--warning",
                TransferStatus::Approved => "badge badge--success",
                TransferStatus::Rejected => "badge badge--error",
            };
            view! { <span class=class>{r.status.display_name()}</span> }.into_any()
        }),
    ]
}

/// Decided requests have no actions, so their rows show no menu button
fn transfer_actions(request: &TransferRequest) -> Vec<RowAction> {
    if !request.status.is_pending() {
        return Vec::new();
    }
    vec![
        RowAction::new("approve", "Setujui").icon("check"),
        RowAction::new("reject", "Tolak").icon("x").danger(),
    ]
}

#[component]
pub fn TransferRequestsPage() -> impl IntoView {
    let requests: RwSignal<Vec<TransferRequest>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    // Пока решение отправляется, меню действий неактивно
    let (deciding, set_deciding) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_requests().await {
                Ok(data) => requests.set(data),
                Err(e) => {
                    log::error!("Failed to load pindah-sambung requests: {}", e);
                    set_error.set(Some(format!("Gagal memuat permohonan: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let on_row_action = Callback::new(move |(request, action): (TransferRequest, String)| {
        let approve = match action.as_str() {
            "approve" => true,
            "reject" => false,
            other => {
                log::warn!("Unknown pindah-sambung action: {}", other);
                return;
            }
        };
        set_deciding.set(true);
        spawn_local(async move {
            match api::decide(&request.id, approve).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Decision for {} failed: {}", request.id, e);
                    set_error.set(Some(format!("Gagal menyimpan keputusan: {}", e)));
                }
            }
            set_deciding.set(false);
        });
    });

    let pending_count = Signal::derive(move || {
        requests.with(|list| list.iter().filter(|r| r.status.is_pending()).count())
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("transfer")}
                    <h1 class="page__title">"Pindah Sambung"</h1>
                    <Badge>{move || format!("{} menunggu", pending_count.get())}</Badge>
                </div>
                <div class="page__header-right">
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
                    data=requests
                    columns=transfer_columns()
                    selectable=false
                    row_actions=RowActions::per_row(transfer_actions)
                    on_row_action=on_row_action
                    disabled=deciding
                    table_id="pindah-sambung-table"
                    empty_message="Belum ada permohonan pindah sambung"
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: TransferStatus) -> TransferRequest {
        TransferRequest {
            id: "ps-1".to_string(),
            member_id: "m-1".to_string(),
            member_name: "Rina".to_string(),
            origin: "Bandung".to_string(),
            destination: "Bekasi".to_string(),
            reason: Some("Pindah kerja".to_string()),
            status,
            requested_at: "2024-09-12T09:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_only_pending_requests_have_actions() {
        assert_eq!(transfer_actions(&request(TransferStatus::Pending)).len(), 2);
        assert!(transfer_actions(&request(TransferStatus::Approved)).is_empty());
        assert!(transfer_actions(&request(TransferStatus::Rejected)).is_empty());
    }

    #[test]
    fn test_reject_is_marked_destructive() {
        let actions = transfer_actions(&request(TransferStatus::Pending));
        assert!(actions.iter().any(|a| a.value == "reject" && a.danger));
    }
}
