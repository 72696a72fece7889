//! JPG to PDF Pro web front end
//!
//! Leptos client-side app mounted into `<body>` by Trunk. All state rules
//! come from `pdfpro-app`; this crate binds them to the browser.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod error;

use app::App;

pub use error::{WebError, WebResult};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    log::info!("JPG to PDF Pro initializing...");

    mount_to_body(App);

    log::info!("JPG to PDF Pro mounted successfully");
}
