//! Weight Page
//!
//! Record management and the two-user comparison, one tab each.

use leptos::*;

use crate::components::weight::{
    export_records, reload_records, WeightComparison, WeightFormModal, WeightQueryForm,
    WeightRecordTable,
};
use crate::state::{provide_weight_state, use_global_state, WeightTab};

#[component]
pub fn WeightPage() -> impl IntoView {
    let weight = provide_weight_state();
    let global = use_global_state();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-gray-800">"Weight"</h1>
                <div class="flex space-x-2">
                    <TabButton label="Records" tab=WeightTab::Records />
                    <TabButton label="Compare" tab=WeightTab::Compare />
                </div>
            </div>

            {move || match weight.tab.get() {
                WeightTab::Records => view! {
                    <div>
                        <WeightQueryForm />

                        <div class="flex justify-between mb-4">
                            <button
                                on:click=move |_| weight.open_create()
                                class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white"
                            >
                                "+ Add record"
                            </button>
                            <div class="flex items-center space-x-2">
                                {move || weight.remote.get().then(|| view! {
                                    <span class="text-xs text-green-600">"Synced with server"</span>
                                })}
                                <button
                                    on:click=move |_| reload_records(weight, global)
                                    disabled=move || global.loading.get()
                                    class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                                >
                                    "Load from server"
                                </button>
                                <button
                                    on:click=move |_| export_records(global)
                                    disabled=move || global.loading.get()
                                    class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                                >
                                    "Export"
                                </button>
                            </div>
                        </div>

                        <WeightRecordTable />
                    </div>
                }.into_view(),
                WeightTab::Compare => view! { <WeightComparison /> }.into_view(),
            }}

            <WeightFormModal />
        </div>
    }
}

#[component]
fn TabButton(label: &'static str, tab: WeightTab) -> impl IntoView {
    let weight = crate::state::use_weight_state();

    view! {
        <button
            on:click=move |_| weight.tab.set(tab)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if weight.tab.get() == tab {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} bg-gray-100 text-gray-600 hover:bg-gray-200", base)
                }
            }
        >
            {label}
        </button>
    }
}
