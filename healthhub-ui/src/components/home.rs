//! Home Page Sections
//!
//! Maintenance banner, health library cards, recommended reading and the
//! quick actions strip.

use leptos::*;

use super::link::CommonLink;

pub const MAINTENANCE_NOTICE: &str =
    "System notice: scheduled maintenance this Friday (00:00-02:00)";

/// A card linking into the health library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthCard {
    pub title: &'static str,
    pub content: &'static str,
    pub path: &'static str,
}

pub const HEALTH_CARDS: [HealthCard; 3] = [
    HealthCard {
        title: "Healthy Eating Guide",
        content: "Balance your daily nutrition",
        path: "/nutrition",
    },
    HealthCard {
        title: "Exercise Plans",
        content: "A workout plan made for you",
        path: "/exercise",
    },
    HealthCard {
        title: "Weight Management Tips",
        content: "10 ways to keep a healthy weight",
        path: "/weight-tips",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub content: &'static str,
}

pub const RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        title: "Better Sleep",
        content: "7 tips to improve sleep quality",
    },
    Recommendation {
        title: "Mental Health Guide",
        content: "Effective ways to manage stress",
    },
    Recommendation {
        title: "Everyday Wellness",
        content: "Simple healthy habits",
    },
];

/// Recommended articles open the blog
pub const RECOMMENDATION_HREF: &str = "/blog";

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let (open, set_open) = create_signal(true);

    view! {
        <Show when=move || open.get()>
            <div class="mb-6 flex items-center justify-between rounded-lg border border-blue-200 bg-blue-50 px-4 py-3">
                <div class="flex items-center space-x-2 text-blue-800">
                    <span>"ℹ"</span>
                    <span>{MAINTENANCE_NOTICE}</span>
                </div>
                <button
                    on:click=move |_| set_open.set(false)
                    class="text-blue-400 hover:text-blue-700"
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}

#[component]
pub fn HealthCardGrid() -> impl IntoView {
    view! {
        <section class="mb-8">
            <h2 class="text-2xl font-semibold mb-4 text-gray-800">"Health Library"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {HEALTH_CARDS.iter().map(|card| view! {
                    <div class="bg-white rounded-xl shadow-lg hover:shadow-xl transition-shadow">
                        <div class="p-6">
                            <h3 class="text-lg font-medium">{card.title}</h3>
                            <p class="text-gray-600 mt-1">{card.content}</p>
                        </div>
                        <div class="border-t border-gray-100 px-6 py-3 text-center">
                            <CommonLink href=card.path class="text-blue-600 hover:text-blue-800 font-medium">
                                "View details →"
                            </CommonLink>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn RecommendationSection() -> impl IntoView {
    view! {
        <section class="mb-8">
            <h2 class="text-2xl font-semibold mb-4 text-gray-800">"Recommended Reading"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {RECOMMENDATIONS.iter().map(|item| view! {
                    <div class="bg-white p-6 rounded-xl shadow-lg hover:shadow-xl transition-shadow">
                        <h3 class="text-lg font-medium text-gray-800">{item.title}</h3>
                        <p class="text-gray-600 mt-2 mb-4">{item.content}</p>
                        <CommonLink href=RECOMMENDATION_HREF class="text-blue-600 hover:text-blue-800 font-medium">
                            "Read now"
                        </CommonLink>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn QuickActions() -> impl IntoView {
    let link_class = "flex items-center gap-2 text-lg font-medium text-gray-700 hover:text-blue-600";

    view! {
        <div class="bg-gray-50 py-8 rounded-xl mt-8">
            <div class="max-w-4xl mx-auto flex justify-around">
                <CommonLink href="/report" class=link_class>
                    <span>"📊"</span>
                    <span>"Generate health report"</span>
                </CommonLink>
                <CommonLink href="/reminder" class=link_class>
                    <span>"⏰"</span>
                    <span>"Set reminder"</span>
                </CommonLink>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::link::LinkKind;

    #[test]
    fn test_home_links_are_internal() {
        for card in HEALTH_CARDS {
            assert_eq!(LinkKind::classify(card.path), LinkKind::Internal);
        }
        assert_eq!(LinkKind::classify(RECOMMENDATION_HREF), LinkKind::Internal);
    }
}
