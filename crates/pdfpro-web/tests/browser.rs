#![cfg(target_arch = "wasm32")]
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! Browser binding tests
//!
//! Run with `wasm-pack test --headless --firefox crates/pdfpro-web`.

use std::cell::Cell;
use std::rc::Rc;

use pdfpro_app::{DocumentEffects, HashRouter, Location, Page, PageTransition};
use pdfpro_web::app::services::document::BrowserDocument;
use pdfpro_web::app::services::location::BrowserLocation;
use wasm_bindgen_test::*;
use web_sys::Event;

wasm_bindgen_test_configure!(run_in_browser);

fn fire_hash_change() {
    let window = web_sys::window().unwrap();
    let event = Event::new("hashchange").unwrap();
    window.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn navigate_round_trips_through_location_hash() {
    let router = HashRouter::new(BrowserLocation::from_window().unwrap());

    for page in Page::all() {
        router.navigate(*page).unwrap();
        assert_eq!(router.location().hash(), page.href());
        assert_eq!(router.current_page(), *page);
    }
}

#[wasm_bindgen_test]
fn listener_released_on_drop() {
    let location = BrowserLocation::from_window().unwrap();
    let calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&calls);
    let subscription = location.subscribe(Box::new(move || counter.set(counter.get() + 1)));
    assert!(subscription.is_active());

    fire_hash_change();
    assert_eq!(calls.get(), 1);

    drop(subscription);
    fire_hash_change();
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
fn mounted_router_reports_current_page() {
    let location = BrowserLocation::from_window().unwrap();
    location.set_hash("/about").unwrap();
    let router = HashRouter::new(location);

    let seen = Rc::new(Cell::new(Page::Home));
    let sink = Rc::clone(&seen);
    let _subscription = router.mount(move |page| sink.set(page));
    assert_eq!(seen.get(), Page::About);

    router.location().set_hash("/bogus").unwrap();
    fire_hash_change();
    assert_eq!(seen.get(), Page::Home);
}

#[wasm_bindgen_test]
fn transition_sets_document_title() {
    let document = BrowserDocument::current().unwrap();
    PageTransition {
        from: None,
        to: Page::Tools,
    }
    .apply(&document);

    let title = web_sys::window().unwrap().document().unwrap().title();
    assert_eq!(title, "Converter Tool | JPG to PDF Pro");

    document.set_title(Page::About.title());
    let title = web_sys::window().unwrap().document().unwrap().title();
    assert_eq!(title, "About Us | JPG to PDF Pro");
}
