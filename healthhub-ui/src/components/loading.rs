//! Loading Component
//!
//! Spinner shown inline or as a fullscreen overlay.

use leptos::*;

pub const DEFAULT_TIP: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinSize {
    /// Spinner diameter in pixels
    pub fn pixels(self) -> u32 {
        match self {
            SpinSize::Small => 24,
            SpinSize::Medium => 32,
            SpinSize::Large => 40,
        }
    }
}

/// Spinner with a caption
#[component]
pub fn LoadingSpin(
    #[prop(optional)]
    size: SpinSize,
    #[prop(optional)]
    fullscreen: bool,
    #[prop(into, default = DEFAULT_TIP.to_string())]
    tip: String,
) -> impl IntoView {
    let px = size.pixels();
    let spinner = view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-2">
            <div
                class="loading-spinner"
                style=format!("width: {}px; height: {}px", px, px)
            />
            <span class="text-sm text-blue-600">{tip}</span>
        </div>
    };

    if fullscreen {
        view! {
            <div class="fixed inset-0 z-[9999] bg-white/80 flex items-center justify-center">
                {spinner}
            </div>
        }
        .into_view()
    } else {
        spinner.into_view()
    }
}
