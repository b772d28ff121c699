//! UI Components
//!
//! Reusable Leptos components for the HealthHub pages.

pub mod blog_list;
pub mod home;
pub mod link;
pub mod loading;
pub mod nav;
pub mod notice;
pub mod permission;
pub mod weight;

pub use blog_list::LatestPosts;
pub use home::{HealthCardGrid, NotificationBanner, QuickActions, RecommendationSection};
pub use link::CommonLink;
pub use loading::{LoadingSpin, SpinSize};
pub use nav::AppHeader;
pub use notice::NoticeStack;
pub use permission::PermissionModal;
