//! VisionEstate Web App (Leptos + WASM)

mod app;
mod components;
mod pages;
mod sections;

pub mod api;
pub mod config;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(app::App);
}
