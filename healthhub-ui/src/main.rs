//! HealthHub Web App
//!
//! Weight tracking and health reading in the browser, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Weight records with filtering, sorting and pagination
//! - Side-by-side comparison of two users
//! - Latest posts from the health blog
//! - Permission and error notices for every failed request
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Domain logic lives in the `healthhub` crate; this crate wires
//! it to signals and talks to the backend through a fetch transport.

use leptos::*;

mod api;
mod app;
mod components;
mod hooks;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
