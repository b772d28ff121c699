//! Blog List Component
//!
//! Grid of the latest blog posts with summaries.

use healthhub::blog::{BlogPost, BlogQuery};
use leptos::*;

use super::loading::LoadingSpin;
use crate::hooks::use_blog_posts;

#[component]
pub fn LatestPosts(
    #[prop(optional)]
    query: BlogQuery,
    #[prop(default = "Latest Articles")]
    title: &'static str,
) -> impl IntoView {
    let blog = use_blog_posts(query);

    view! {
        <section class="mb-8">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-2xl font-semibold text-gray-800">{title}</h2>
                <button
                    on:click=move |_| blog.mutate()
                    disabled=move || blog.validating.get()
                    class="text-sm text-blue-600 hover:text-blue-800 disabled:text-gray-400"
                >
                    {move || if blog.validating.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            {move || {
                if blog.is_loading() {
                    view! { <LoadingSpin /> }.into_view()
                } else if blog.is_error() && blog.posts().is_empty() {
                    view! {
                        <div class="text-center py-8 text-gray-500">
                            <p>"Failed to load articles"</p>
                        </div>
                    }.into_view()
                } else if blog.posts().is_empty() {
                    view! {
                        <div class="text-center py-8 text-gray-500">"No articles yet"</div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {blog.posts().into_iter().map(|post| view! { <BlogCard post=post /> }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

#[component]
fn BlogCard(post: BlogPost) -> impl IntoView {
    let published = post.created_at.format("%Y-%m-%d").to_string();
    let views = post.views.unwrap_or(0);

    view! {
        <article class="bg-white rounded-xl shadow-lg overflow-hidden hover:shadow-xl transition-shadow">
            {post.cover_image.map(|src| view! {
                <img src=src alt="" class="w-full h-40 object-cover" />
            })}
            <div class="p-6">
                <h3 class="text-lg font-medium text-gray-800">{post.title}</h3>
                <p class="text-gray-600 mt-2 text-sm">{post.summary.unwrap_or_default()}</p>
                <div class="flex justify-between text-xs text-gray-400 mt-4">
                    <span>{published}</span>
                    <span>{format!("{} views", views)}</span>
                </div>
            </div>
        </article>
    }
}
