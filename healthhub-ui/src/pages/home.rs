//! Home Page
//!
//! Landing view: notices, the health library, reading suggestions and the
//! latest blog posts.

use leptos::*;

use crate::components::{
    HealthCardGrid, LatestPosts, NotificationBanner, QuickActions, RecommendationSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="w-full max-w-screen-2xl mx-auto px-4 md:px-20">
            <NotificationBanner />
            <HealthCardGrid />
            <RecommendationSection />
            <LatestPosts />
            <QuickActions />
        </div>
    }
}
