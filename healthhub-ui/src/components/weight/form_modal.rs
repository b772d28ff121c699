//! Create / edit record modal

use healthhub::records::{FieldErrors, FormField, RecordDraft, RecordForm};
use leptos::*;

use super::reload_records;
use crate::api;
use crate::state::weight::{check_remote_edit, parse_date_input};
use crate::state::{use_global_state, use_weight_state};

#[component]
pub fn WeightFormModal() -> impl IntoView {
    let weight = use_weight_state();
    let global = use_global_state();

    let (date, set_date) = create_signal(String::new());
    let (kg, set_kg) = create_signal(String::new());
    let errors = create_rw_signal(None::<FieldErrors>);

    // Reset the fields every time the modal opens
    create_effect(move |_| {
        if !weight.modal_open.get() {
            return;
        }
        let form = match weight.editing.get() {
            Some(record) => RecordForm::from_record(&record),
            None => RecordForm::blank(chrono::Local::now().date_naive()),
        };
        set_date.set(form.date.map(|d| d.to_string()).unwrap_or_default());
        set_kg.set(form.weight);
        errors.set(None);
    });

    let submit_draft = move |draft: RecordDraft| {
        if !weight.remote.get_untracked() {
            match weight.apply_draft(draft) {
                Ok(message) => global.show_success(message),
                Err(message) => global.show_error(&message),
            }
            return;
        }

        let editing = weight.editing.get_untracked();
        if let Some(record) = &editing {
            if let Err(field_errors) = check_remote_edit(record, &draft) {
                errors.set(Some(field_errors));
                return;
            }
        }

        spawn_local(async move {
            let gateway = api::gateway(global);
            let sent = match &editing {
                Some(record) => gateway.update_record(&record.id, draft.weight).await,
                None => gateway.create_record(&draft).await.map(|_| ()),
            };
            if sent.is_ok() {
                global.show_success(if editing.is_some() { "Record updated" } else { "Record added" });
                weight.close_modal();
                reload_records(weight, global);
            }
        });
    };

    let on_ok = move |_| {
        let form = RecordForm::new(parse_date_input(&date.get()), kg.get());
        match form.validate() {
            Ok(draft) => submit_draft(draft),
            Err(field_errors) => errors.set(Some(field_errors)),
        }
    };

    let field_error = move |field: FormField| {
        errors.with(|e| e.as_ref().and_then(|e| e.message_for(field)))
    };

    view! {
        <Show when=move || weight.modal_open.get()>
            <div class="fixed inset-0 z-40 bg-black/40 flex items-center justify-center">
                <div class="bg-white rounded-xl shadow-xl w-full max-w-2xl p-6">
                    <h2 class="text-lg font-semibold text-gray-800 mb-4">
                        {move || if weight.editing.with(Option::is_some) { "Edit record" } else { "New record" }}
                    </h2>

                    <div class="space-y-4">
                        <label class="block">
                            <span class="text-sm text-gray-600">"* Date"</span>
                            <input
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| set_date.set(event_target_value(&ev))
                                readonly=move || weight.date_locked()
                                class="w-full rounded-lg border border-gray-300 px-3 py-2 read-only:bg-gray-100"
                            />
                            {move || field_error(FormField::Date).map(|msg| view! {
                                <p class="text-sm text-red-500 mt-1">{msg}</p>
                            })}
                            <Show when=move || weight.date_locked() && field_error(FormField::Date).is_none()>
                                <p class="text-xs text-gray-400 mt-1">"Only the weight of a saved record can be changed"</p>
                            </Show>
                        </label>

                        <label class="block">
                            <span class="text-sm text-gray-600">"* Weight (kg)"</span>
                            <input
                                type="number"
                                step="0.1"
                                placeholder="Enter weight"
                                prop:value=move || kg.get()
                                on:input=move |ev| set_kg.set(event_target_value(&ev))
                                class="w-full rounded-lg border border-gray-300 px-3 py-2"
                            />
                            {move || field_error(FormField::Weight).map(|msg| view! {
                                <p class="text-sm text-red-500 mt-1">{msg}</p>
                            })}
                        </label>
                    </div>

                    <div class="flex justify-end space-x-2 mt-6">
                        <button
                            on:click=move |_| weight.close_modal()
                            class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                        >
                            "Cancel"
                        </button>
                        <button
                            on:click=on_ok
                            class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white"
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
