//! Global Application State
//!
//! Reactive state shared by every page: notifications, the permission
//! modal and the global loading flag. It is also the error [`Reporter`]
//! handed to the API gateway, so every failed request surfaces here.

use healthhub::gateway::{ErrorReport, Reporter};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// A request is in flight
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Server message of the last permission failure; `Some` opens the modal
    pub permission_denied: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        permission_denied: create_rw_signal(None),
    };

    provide_context(state);
    state
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    pub fn dismiss_permission(&self) {
        self.permission_denied.set(None);
    }
}

impl Reporter for GlobalState {
    fn report(&self, report: ErrorReport) {
        web_sys::console::warn_1(&format!("Request failed: {}", report.message()).into());

        match report {
            ErrorReport::PermissionDenied { message } => self.permission_denied.set(Some(message)),
            ErrorReport::Notify(message) => self.show_error(&message),
        }
    }
}
