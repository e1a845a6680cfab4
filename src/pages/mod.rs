//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod customers;
pub mod dashboard;
pub mod operations;
pub mod settings;

pub use chat::Chat;
pub use customers::Customers;
pub use dashboard::Dashboard;
pub use operations::Operations;
pub use settings::Settings;
