//! Corner notices for request outcomes

use leptos::*;

use crate::state::{use_global_state, GlobalState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Saved,
    Failed,
}

impl NoticeKind {
    fn glyph(self) -> &'static str {
        match self {
            NoticeKind::Saved => "✓",
            NoticeKind::Failed => "!",
        }
    }

    fn accent(self) -> &'static str {
        match self {
            NoticeKind::Saved => "border-emerald-500 text-emerald-700",
            NoticeKind::Failed => "border-rose-500 text-rose-700",
        }
    }

    /// Failures interrupt screen readers, confirmations do not
    fn aria_role(self) -> &'static str {
        match self {
            NoticeKind::Saved => "status",
            NoticeKind::Failed => "alert",
        }
    }

    fn message(self, state: &GlobalState) -> Option<String> {
        match self {
            NoticeKind::Saved => state.success.get(),
            NoticeKind::Failed => state.error.get(),
        }
    }

    fn dismiss(self, state: &GlobalState) {
        match self {
            NoticeKind::Saved => state.success.set(None),
            NoticeKind::Failed => state.clear_error(),
        }
    }
}

/// Failures stack above confirmations
pub const NOTICE_ORDER: [NoticeKind; 2] = [NoticeKind::Failed, NoticeKind::Saved];

#[component]
pub fn NoticeStack() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed top-16 right-4 z-50 w-80 flex flex-col gap-2">
            {NOTICE_ORDER.into_iter().map(|kind| view! {
                {move || kind.message(&state).map(|text| view! { <NoticeCard kind=kind text=text /> })}
            }).collect_view()}
        </div>
    }
}

#[component]
fn NoticeCard(kind: NoticeKind, text: String) -> impl IntoView {
    let state = use_global_state();

    view! {
        <div
            role=kind.aria_role()
            class=format!("flex items-start gap-3 bg-white border-l-4 rounded-md shadow-md px-4 py-3 {}", kind.accent())
        >
            <span class="font-bold">{kind.glyph()}</span>
            <p class="flex-1 text-sm text-gray-700">{text}</p>
            <button
                on:click=move |_| kind.dismiss(&state)
                class="text-gray-400 hover:text-gray-600"
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_listed_first() {
        assert_eq!(NOTICE_ORDER[0], NoticeKind::Failed);
        assert_eq!(NoticeKind::Failed.aria_role(), "alert");
        assert_eq!(NoticeKind::Saved.aria_role(), "status");
    }

    #[test]
    fn test_kinds_look_different() {
        assert_ne!(NoticeKind::Saved.accent(), NoticeKind::Failed.accent());
        assert_ne!(NoticeKind::Saved.glyph(), NoticeKind::Failed.glyph());
    }
}
