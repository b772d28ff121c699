//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AppHeader, LoadingSpin, NoticeStack, PermissionModal, SpinSize};
use crate::pages::{HomePage, WeightPage};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                <AppHeader />

                <main class="flex-1 container mx-auto px-4 pt-20 pb-12">
                    <Routes>
                        <Route path="/" view=HomePage />
                        <Route path="/blog" view=HomePage />
                        <Route path="/monitor" view=HomePage />
                        <Route path="/weight" view=WeightPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <NoticeStack />
                <PermissionModal />

                <Show when=move || state.loading.get()>
                    <LoadingSpin size=SpinSize::Large fullscreen=true />
                </Show>
            </div>
        </Router>
    }
}

/// Footer with the backend address
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (editing, set_editing) = create_signal(false);

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_api_url.set(api::get_api_base());
        set_editing.set(false);
        state.show_success("API URL saved");
    };

    view! {
        <footer class="border-t border-gray-200 bg-white py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-500">
                <span>"HealthHub"</span>

                {move || {
                    if editing.get() {
                        view! {
                            <div class="flex items-center space-x-2">
                                <input
                                    type="text"
                                    prop:value=move || api_url.get()
                                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                                    class="w-72 rounded border border-gray-300 px-2 py-1"
                                />
                                <button on:click=save_url class="text-blue-600 hover:text-blue-800">
                                    "Save"
                                </button>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <button
                                on:click=move |_| set_editing.set(true)
                                class="hover:text-gray-800"
                                title="Change backend"
                            >
                                {move || format!("API: {}", api_url.get())}
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
