//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the domain types
//! shared across pages.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Sidebar collapsed to icon-only width
    pub sidebar_collapsed: RwSignal<bool>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Customer record from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_customer_status")]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_customer_status() -> String {
    "active".to_string()
}

/// Order (board task) from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_priority() -> String {
    "normal".to_string()
}

/// Aggregate stats for the dashboard page
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default)]
    pub revenue: Vec<i64>,
    #[serde(default)]
    pub total_revenue_amount: String,
    #[serde(default)]
    pub active_orders: i64,
    #[serde(default)]
    pub new_customers: i64,
    #[serde(default)]
    pub pending_reviews: i64,
}

impl Default for DashboardStats {
    /// Zeroed shape shown when the stats fetch fails or returns nothing
    fn default() -> Self {
        Self {
            revenue: vec![0; 12],
            total_revenue_amount: "$0".to_string(),
            active_orders: 0,
            new_customers: 0,
            pending_reviews: 0,
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        sidebar_collapsed: create_rw_signal(false),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_fallback_is_zeroed() {
        let stats = DashboardStats::default();
        assert_eq!(stats.revenue, vec![0; 12]);
        assert_eq!(stats.total_revenue_amount, "$0");
        assert_eq!(stats.active_orders, 0);
        assert_eq!(stats.new_customers, 0);
        assert_eq!(stats.pending_reviews, 0);
    }

    #[test]
    fn test_order_defaults_fill_missing_fields() {
        let order: Order =
            serde_json::from_str(r#"{"id":"o-1","title":"SEO Audit"}"#).unwrap();
        assert_eq!(order.status, "");
        assert_eq!(order.priority, "normal");
        assert!(order.client_id.is_none());
        assert!(order.tags.is_empty());
    }

    #[test]
    fn test_customer_status_defaults_to_active() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":"c-1","name":"Jane Doe"}"#).unwrap();
        assert_eq!(customer.status, "active");
    }
}
