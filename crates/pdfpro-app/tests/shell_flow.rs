#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! # Shell Flow Tests
//!
//! Drives the shell the way the web front end does: a mounted router feeds
//! page changes into shared shell state, transitions hit a fake document,
//! and the converter page reports through the toast slot.

use std::cell::RefCell;
use std::rc::Rc;

use pdfpro_app::{
    ConversionQueue, DocumentEffects, HashRouter, Location, MemoryLocation, Page, QueueLimits,
    Shell, ToastKind,
};

#[derive(Default)]
struct FakeDocument {
    title: RefCell<String>,
    scrolls: RefCell<usize>,
}

impl DocumentEffects for FakeDocument {
    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn scroll_to_top(&self) {
        *self.scrolls.borrow_mut() += 1;
    }
}

struct Harness {
    location: MemoryLocation,
    router: HashRouter<MemoryLocation>,
    shell: Rc<RefCell<Shell>>,
    document: Rc<FakeDocument>,
}

impl Harness {
    fn load(hash: &str) -> (Self, pdfpro_app::Subscription) {
        let location = MemoryLocation::with_hash(hash);
        let router = HashRouter::new(location.clone());
        let shell = Rc::new(RefCell::new(Shell::new()));
        let document = Rc::new(FakeDocument::default());

        let sub = {
            let shell = Rc::clone(&shell);
            let document = Rc::clone(&document);
            router.mount(move |page| {
                let transition = shell.borrow_mut().enter(page);
                if let Some(transition) = transition {
                    transition.apply(&*document);
                }
            })
        };

        (
            Self {
                location,
                router,
                shell,
                document,
            },
            sub,
        )
    }

    fn page(&self) -> Page {
        self.shell.borrow().page()
    }

    fn title(&self) -> String {
        self.document.title.borrow().clone()
    }
}

#[test]
fn bookmarked_load_restores_page() {
    let (h, _sub) = Harness::load("#/about");
    assert_eq!(h.page(), Page::About);
    assert_eq!(h.title(), "About Us | JPG to PDF Pro");
    assert_eq!(*h.document.scrolls.borrow(), 1);
}

#[test]
fn displayed_page_tracks_hash() {
    let (h, _sub) = Harness::load("");
    assert_eq!(h.page(), Page::Home);

    h.router.navigate(Page::Tools).unwrap();
    assert_eq!(h.page(), Page::Tools);
    assert_eq!(h.page(), Page::from_hash(&h.location.hash()));
    assert_eq!(h.title(), "Converter Tool | JPG to PDF Pro");

    // Back button / manual edit
    h.location.set_hash("#/about").unwrap();
    assert_eq!(h.page(), Page::About);

    h.location.set_hash("#/missing").unwrap();
    assert_eq!(h.page(), Page::Home);
    assert_eq!(
        h.title(),
        "JPG to PDF Pro - Free & Secure Image to PDF Converter"
    );
}

#[test]
fn equivalent_hash_does_not_rerun_effects() {
    let (h, _sub) = Harness::load("#/home");
    assert_eq!(*h.document.scrolls.borrow(), 1);

    // Different hash, same page
    h.location.set_hash("#/unknown").unwrap();
    assert_eq!(h.page(), Page::Home);
    assert_eq!(*h.document.scrolls.borrow(), 1);
}

#[test]
fn unmounted_shell_ignores_hash_changes() {
    let (h, sub) = Harness::load("#/tools");
    drop(sub);
    assert_eq!(h.location.listener_count(), 0);

    h.location.set_hash("#/about").unwrap();
    assert_eq!(h.page(), Page::Tools);
}

#[test]
fn converter_outcomes_surface_as_toasts() {
    let (h, _sub) = Harness::load("#/tools");
    let mut queue = ConversionQueue::new(QueueLimits::default());

    let report = queue.add_many([
        ((), "scan-1.jpg", 120_000_u64, "image/jpeg"),
        ((), "notes.txt", 12, "text/plain"),
    ]);
    if let Some(request) = report.toast() {
        h.shell.borrow_mut().show_toast(request.message, request.kind);
    }
    assert_eq!(
        h.shell.borrow().toasts().current().map(|t| t.kind),
        Some(ToastKind::Error)
    );

    queue.begin().unwrap();
    let request = queue.finish(Ok(()));
    h.shell.borrow_mut().show_toast(request.message, request.kind);

    let shell = h.shell.borrow();
    let toast = shell.toasts().current().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Converted 1 image to PDF");
}
