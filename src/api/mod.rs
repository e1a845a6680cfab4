//! API Layer
//!
//! REST client for the ServiceDash backend.

pub mod client;

pub use client::*;
