//! Link Component
//!
//! One link for every destination: router links for app paths, new tabs
//! for web URLs, and a visible marker for anything else.

use leptos::*;
use leptos_router::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// App route, handled by the router
    Internal,
    /// Opens in a new tab
    External,
    Invalid,
}

impl LinkKind {
    pub fn classify(href: &str) -> Self {
        if href.starts_with('/') {
            LinkKind::Internal
        } else if href.starts_with("http") {
            LinkKind::External
        } else {
            LinkKind::Invalid
        }
    }
}

#[component]
pub fn CommonLink(
    #[prop(into)]
    href: String,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    match LinkKind::classify(&href) {
        LinkKind::Internal => view! {
            <A href=href class=class>{children()}</A>
        }
        .into_view(),
        LinkKind::External => view! {
            <a href=href class=class target="_blank" rel="noopener noreferrer">{children()}</a>
        }
        .into_view(),
        LinkKind::Invalid => view! {
            <span class="text-red-500 line-through" title=format!("href = {}", href)>
                "Wrong Link"
            </span>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_links() {
        assert_eq!(LinkKind::classify("/weight"), LinkKind::Internal);
        assert_eq!(LinkKind::classify("https://example.com"), LinkKind::External);
        assert_eq!(LinkKind::classify("http://example.com"), LinkKind::External);
        assert_eq!(LinkKind::classify("#"), LinkKind::Invalid);
        assert_eq!(LinkKind::classify(""), LinkKind::Invalid);
    }
}
