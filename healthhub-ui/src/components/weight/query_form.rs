//! Record query form

use healthhub::query::QueryParams;
use leptos::*;

use crate::state::use_weight_state;
use crate::state::weight::parse_date_input;

#[component]
pub fn WeightQueryForm() -> impl IntoView {
    let weight = use_weight_state();

    let (id, set_id) = create_signal(String::new());
    let (date, set_date) = create_signal(String::new());
    let (kg, set_kg) = create_signal(String::new());
    let (submitted, set_submitted) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let params = QueryParams::new()
            .id(id.get())
            .date(parse_date_input(&date.get()))
            .weight(kg.get())
            .submitted_on(parse_date_input(&submitted.get()));
        weight.search(params);
    };

    let on_reset = move |_| {
        set_id.set(String::new());
        set_date.set(String::new());
        set_kg.set(String::new());
        set_submitted.set(String::new());
        weight.reset_search();
    };

    let input_class = "w-full rounded-lg border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none";

    view! {
        <form on:submit=on_submit class="bg-white rounded-xl p-4 shadow mb-4">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <label class="block">
                    <span class="text-sm text-gray-600">"ID"</span>
                    <input
                        type="text"
                        placeholder="Record ID"
                        prop:value=move || id.get()
                        on:input=move |ev| set_id.set(event_target_value(&ev))
                        class=input_class
                    />
                </label>
                <label class="block">
                    <span class="text-sm text-gray-600">"Date"</span>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        class=input_class
                    />
                </label>
                <label class="block">
                    <span class="text-sm text-gray-600">"Weight (kg)"</span>
                    <input
                        type="number"
                        step="0.1"
                        prop:value=move || kg.get()
                        on:input=move |ev| set_kg.set(event_target_value(&ev))
                        class=input_class
                    />
                </label>
                <label class="block">
                    <span class="text-sm text-gray-600">"Submitted on"</span>
                    <input
                        type="date"
                        prop:value=move || submitted.get()
                        on:input=move |ev| set_submitted.set(event_target_value(&ev))
                        class=input_class
                    />
                </label>
            </div>

            <div class="flex justify-end space-x-2 mt-4">
                <button type="submit" class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white">
                    "🔍 Search"
                </button>
                <button
                    type="button"
                    on:click=on_reset
                    class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                >
                    "Reset"
                </button>
            </div>
        </form>
    }
}
