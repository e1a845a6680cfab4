//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod empty_state;
pub mod loading;
pub mod sidebar;
pub mod stat_card;
pub mod toast;

pub use chart::RevenueChart;
pub use empty_state::EmptyState;
pub use loading::{BoardSkeleton, ListSkeleton};
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use toast::Toast;
