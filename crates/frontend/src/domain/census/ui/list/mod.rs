use chrono::Local;
use contracts::domain::census::CensusRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::census::api;
use crate::shared::components::data_grid::{
    CellValue, DataGrid, GridColumn, GridRow, RowAction, RowActions,
};
use crate::shared::date_utils::{age_on, format_date};
use crate::shared::icons::icon;

impl GridRow for CensusRecord {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "member_number" => self.member_number.as_str().into(),
            "full_name" => self.full_name.to_lowercase().into(),
            "gender" => self.gender.short_label().into(),
            // ISO-формат сортируется как строка
            "birth_date" => self.birth_date.map(|d| d.format("%Y-%m-%d").to_string()).into(),
            "region" => self.region.as_str().into(),
            "district" => self.district.as_str().into(),
            "status" => self.status.display_name().into(),
            _ => CellValue::Empty,
        }
    }
}

fn census_columns() -> Vec<GridColumn<CensusRecord>> {
    let today = Local::now().date_naive();
    vec![
        GridColumn::new("no", "No").render(|_: &CensusRecord, index| (index + 1).to_string().into_any()),
        GridColumn::new("member_number", "No. Induk").sortable().emphasize(),
        GridColumn::new("full_name", "Nama")
            .sortable()
            .render(|r: &CensusRecord, _| r.full_name.clone().into_any()),
        GridColumn::new("gender", "L/P"),
        GridColumn::new("birth_date", "Tanggal Lahir")
            .sortable()
            .render(move |r: &CensusRecord, _| match r.birth_date {
                Some(date) => format!("{} ({} th)", format_date(&date), age_on(&date, &today)).into_any(),
                None => "-".into_any(),
            }),
        GridColumn::new("region", "Wilayah").sortable(),
        GridColumn::new("district", "Daerah").sortable(),
        GridColumn::new("status", "Status").sortable().render(|r: &CensusRecord, _| {
            view! { <span class=r.status.badge_class()>{r.status.display_name()}</span> }.into_any()
        }),
    ]
}

fn census_actions() -> Vec<RowAction> {
    vec![
        RowAction::new("mark_moved", "Tandai pindah").icon("transfer"),
        RowAction::new("delete", "Hapus").icon("trash").danger(),
    ]
}

#[component]
pub fn CensusListPage() -> impl IntoView {
    let records: RwSignal<Vec<CensusRecord>> = RwSignal::new(Vec::new());
    let region_filter = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let region = region_filter.get_untracked();
        spawn_local(async move {
            let region = Some(region.trim()).filter(|r| !r.is_empty());
            match api::fetch_records(region).await {
                Ok(data) => records.set(data),
                Err(e) => {
                    log::error!("Failed to load census records: {}", e);
                    set_error.set(Some(format!("Gagal memuat data sensus: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let on_row_action = Callback::new(move |(record, action): (CensusRecord, String)| {
        spawn_local(async move {
            let result = match action.as_str() {
                "mark_moved" => api::mark_moved(&record.id).await,
                "delete" => api::delete_record(&record.id).await,
                other => {
                    log::warn!("Unknown census action: {}", other);
                    Ok(())
                }
            };
            match result {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Census action {} failed for {}: {}", action, record.id, e);
                    set_error.set(Some(format!("Aksi gagal: {}", e)));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("census")}
                    <h1 class="page__title">"Data Sensus"</h1>
                    <Badge>{move || records.with(|r| r.len()).to_string()}</Badge>
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

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=region_filter placeholder="Wilayah..." />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| load_data()
                            disabled=Signal::derive(move || loading.get())
                        >
                            "Cari"
                        </Button>
                    </Flex>
                </div>

                <DataGrid
                    data=records
                    columns=census_columns()
                    row_actions=RowActions::Static(census_actions())
                    on_row_action=on_row_action
                    table_id="census-table"
                    empty_message="Tidak ada data sensus untuk filter ini"
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::data_grid::{SortState, sort::sorted_order};
    use chrono::NaiveDate;
    use contracts::domain::census::{CensusStatus, Gender};

    fn record(id: &str, name: &str, birth: Option<(i32, u32, u32)>) -> CensusRecord {
        CensusRecord {
            id: id.to_string(),
            member_number: format!("31.71.{}", id),
            full_name: name.to_string(),
            gender: Gender::Male,
            birth_date: birth.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            region: "DKI Jakarta".to_string(),
            district: "Menteng".to_string(),
            status: CensusStatus::Active,
            updated_at: "2024-10-01T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_birth_date_sorts_chronologically_and_missing_first() {
        let data = vec![
            record("1", "Agus", Some((1990, 1, 5))),
            record("2", "Bambang", Some((1985, 12, 31))),
            record("3", "Citra", None),
        ];
        let mut sort = SortState::new();
        sort.request_sort("birth_date");
        assert_eq!(sorted_order(&data, &sort), vec![2, 1, 0]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let data = vec![record("1", "budi", None), record("2", "Agus", None)];
        let mut sort = SortState::new();
        sort.request_sort("full_name");
        assert_eq!(sorted_order(&data, &sort), vec![1, 0]);
    }
}
