//! State Management
//!
//! Global application state and the kanban board model.

pub mod board;
pub mod global;

pub use board::{Board, ColumnKey};
pub use global::{provide_global_state, Customer, DashboardStats, GlobalState, Order};
