//! Navigation Component
//!
//! Fixed header with the brand and the section links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <nav class="fixed top-0 inset-x-0 z-40 bg-white shadow">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-12">
                    <A href="/" class="text-xl font-bold text-blue-500 whitespace-nowrap">
                        "HealthHub"
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/weight" icon="⚖" label="Weight" />
                        <NavLink href="/blog" icon="📖" label="Health Library" />
                        <NavLink href="/monitor" icon="💡" label="Monitor" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex items-center px-4 h-12 text-gray-600 hover:text-blue-500 hover:bg-gray-50 transition-colors"
            active_class="text-blue-500"
        >
            <span class="mr-2">{icon}</span>
            {label}
        </A>
    }
}
