//! Permission Modal
//!
//! Opened whenever a request fails with a permission error.

use leptos::*;

use healthhub::gateway::report::{PERMISSION_ACTION, PERMISSION_CONTENT, PERMISSION_TITLE};

use crate::state::use_global_state;

#[component]
pub fn PermissionModal() -> impl IntoView {
    let state = use_global_state();

    let request_access = move |_| {
        state.dismiss_permission();
        state.show_success("Access request sent");
    };

    view! {
        {move || {
            state.permission_denied.get().map(|message| view! {
                <div class="fixed inset-0 z-50 bg-black/40 flex items-center justify-center">
                    <div class="bg-white rounded-xl shadow-xl w-full max-w-md p-6">
                        <h2 class="text-lg font-semibold text-gray-800">{PERMISSION_TITLE}</h2>
                        <p class="text-gray-600 mt-2">{PERMISSION_CONTENT}</p>
                        <p class="text-xs text-gray-400 mt-2">{message}</p>

                        <div class="flex justify-end space-x-2 mt-6">
                            <button
                                on:click=move |_| state.dismiss_permission()
                                class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                            >
                                "Close"
                            </button>
                            <button
                                on:click=request_access
                                class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white"
                            >
                                {PERMISSION_ACTION}
                            </button>
                        </div>
                    </div>
                </div>
            })
        }}
    }
}
