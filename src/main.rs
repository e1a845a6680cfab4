//! ServiceDash Admin
//!
//! Business-operations admin dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Revenue and activity overview with a 12-month chart
//! - Customer records with quick-create
//! - Kanban operations board with drag-and-drop status updates
//! - Local team notes chat
//! - Account and connection settings
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the ServiceDash REST API over HTTP; the
//! backend itself lives in a separate service.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
