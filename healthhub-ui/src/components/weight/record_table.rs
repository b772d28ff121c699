//! Sortable, paginated record table

use healthhub::gateway::{ConfirmPrompt, DeleteOutcome};
use healthhub::query::{SortKey, PAGE_SIZE_OPTIONS};
use healthhub::records::WeightRecord;
use leptos::*;

use super::reload_records;
use crate::api;
use crate::state::weight::{format_submitted, page_view, sort_indicator};
use crate::state::{use_global_state, use_weight_state};

#[component]
pub fn WeightRecordTable() -> impl IntoView {
    let weight = use_weight_state();
    let global = use_global_state();

    let rows = create_memo(move |_| weight.visible_records());
    let view_model = create_memo(move |_| rows.with(|r| page_view(r, weight.pagination.get())));

    let on_delete = move |id: String| {
        if !weight.remote.get_untracked() {
            let removed = weight.delete(&id, |_| api::confirm_now(&ConfirmPrompt::delete_record()));
            if removed {
                global.show_success("Record deleted");
            }
            return;
        }

        spawn_local(async move {
            let gateway = api::gateway(global);
            if let Ok(DeleteOutcome::Deleted) = gateway.delete_record(&id, &api::BrowserConfirm).await {
                global.show_success("Record deleted");
                reload_records(weight, global);
            }
        });
    };

    let header = move |key: SortKey, label: &'static str| {
        view! {
            <th
                class="px-4 py-3 cursor-pointer select-none hover:bg-gray-100"
                on:click=move |_| weight.toggle_sort(key)
            >
                {label}
                {move || sort_indicator(weight.sort.get(), key)}
            </th>
        }
    };

    view! {
        <div class="bg-white rounded-xl shadow overflow-x-auto">
            <table class="w-full text-left border-collapse">
                <thead class="bg-gray-50 text-sm text-gray-600">
                    <tr>
                        <th class="px-4 py-3 w-20 text-center">"#"</th>
                        {header(SortKey::Date, "Date")}
                        {header(SortKey::Weight, "Weight (kg)")}
                        <th class="px-4 py-3">"Submitted at"</th>
                        <th class="px-4 py-3 w-40">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let page = view_model.get();
                        if page.rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="px-4 py-8 text-center text-gray-400">"No records"</td>
                                </tr>
                            }.into_view()
                        } else {
                            page.rows.into_iter().map(|record| view! {
                                <RecordRow record=record on_delete=on_delete />
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>

            <div class="flex items-center justify-between px-4 py-3 border-t border-gray-100 text-sm">
                <span class="text-gray-500">{move || view_model.with(|p| p.label.clone())}</span>

                <div class="flex items-center space-x-2">
                    <button
                        disabled=move || !view_model.with(|p| p.has_prev)
                        on:click=move |_| {
                            let current = view_model.with_untracked(|p| p.current);
                            weight.pagination.update(|p| *p = p.goto(current - 1));
                        }
                        class="px-3 py-1 rounded border border-gray-300 disabled:text-gray-300"
                    >
                        "‹"
                    </button>
                    <span>{move || view_model.with(|p| format!("{} / {}", p.current, p.page_count))}</span>
                    <button
                        disabled=move || !view_model.with(|p| p.has_next)
                        on:click=move |_| {
                            let current = view_model.with_untracked(|p| p.current);
                            weight.pagination.update(|p| *p = p.goto(current + 1));
                        }
                        class="px-3 py-1 rounded border border-gray-300 disabled:text-gray-300"
                    >
                        "›"
                    </button>

                    <select
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                weight.pagination.update(|p| *p = p.resize(size));
                            }
                        }
                        class="rounded border border-gray-300 px-2 py-1"
                    >
                        {PAGE_SIZE_OPTIONS.iter().map(|size| {
                            let size = *size;
                            view! {
                                <option
                                    value=size.to_string()
                                    selected=move || weight.pagination.get().page_size() == size
                                >
                                    {format!("{} / page", size)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RecordRow<F>(record: WeightRecord, on_delete: F) -> impl IntoView
where
    F: Fn(String) + Copy + 'static,
{
    let weight = use_weight_state();
    let id = record.id.clone();
    let editable = record.clone();

    view! {
        <tr class="border-t border-gray-100 hover:bg-gray-50">
            <td class="px-4 py-3 text-center">{record.seq}</td>
            <td class="px-4 py-3">{record.date.format("%Y-%m-%d").to_string()}</td>
            <td class="px-4 py-3">{record.weight.one_decimal()}</td>
            <td class="px-4 py-3">{format_submitted(&record.submitted_at)}</td>
            <td class="px-4 py-3 space-x-2">
                <button
                    on:click=move |_| weight.open_edit(editable.clone())
                    class="px-3 py-1 rounded border border-gray-300 hover:bg-gray-100"
                >
                    "Edit"
                </button>
                <button
                    on:click=move |_| on_delete(id.clone())
                    class="px-3 py-1 rounded border border-red-300 text-red-600 hover:bg-red-50"
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
