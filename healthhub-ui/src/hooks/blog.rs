//! Blog Posts Hook
//!
//! Fetches a blog listing once on mount and exposes it as signals. The
//! listing is kept while a refresh is in flight.

use healthhub::blog::{BlogPost, BlogQuery};
use leptos::*;

use crate::api;

/// Reactive handle returned by [`use_blog_posts`]
#[derive(Clone, Copy)]
pub struct BlogPosts {
    data: RwSignal<Option<Vec<BlogPost>>>,
    pub error: RwSignal<Option<String>>,
    /// A fetch is in flight (initial or refresh)
    pub validating: RwSignal<bool>,
    query: StoredValue<BlogQuery>,
}

pub fn use_blog_posts(query: BlogQuery) -> BlogPosts {
    let handle = BlogPosts {
        data: create_rw_signal(None),
        error: create_rw_signal(None),
        validating: create_rw_signal(false),
        query: store_value(query),
    };
    handle.mutate();
    handle
}

impl BlogPosts {
    /// Posts received so far; empty until the first fetch lands
    pub fn posts(&self) -> Vec<BlogPost> {
        self.data.get().unwrap_or_default()
    }

    /// Nothing to show yet and no error either
    pub fn is_loading(&self) -> bool {
        is_loading(self.error.get().is_some(), self.data.with(Option::is_some))
    }

    pub fn is_error(&self) -> bool {
        self.error.with(Option::is_some)
    }

    /// Refetch the listing
    pub fn mutate(&self) {
        let handle = *self;
        let query = handle.query.get_value();
        handle.validating.set(true);

        spawn_local(async move {
            match api::load_blog_posts(query).await {
                Ok(posts) => {
                    handle.data.set(Some(posts));
                    handle.error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Blog fetch failed: {}", e).into());
                    handle.error.set(Some(e.to_string()));
                }
            }
            handle.validating.set(false);
        });
    }
}

fn is_loading(has_error: bool, has_data: bool) -> bool {
    !has_error && !has_data
}
