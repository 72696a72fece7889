#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! # Routing Properties
//!
//! Property tests for hash normalization and navigation round-trips.

use pdfpro_app::{normalize, HashRouter, Location, MemoryLocation, Page};
use proptest::prelude::*;

fn any_page() -> impl Strategy<Value = Page> {
    prop::sample::select(Page::all().to_vec())
}

proptest! {
    #[test]
    fn unknown_names_normalize_to_home(name in any::<String>()) {
        prop_assume!(name != "tools" && name != "about");
        prop_assert_eq!(normalize(&name), Page::Home);
    }

    #[test]
    fn hashes_with_unknown_suffix_resolve_home(suffix in any::<String>()) {
        prop_assume!(suffix != "tools" && suffix != "about");
        let hash = format!("#/{suffix}");
        prop_assert_eq!(Page::from_hash(&hash), Page::Home);
    }

    #[test]
    fn navigate_round_trips(start in any_page(), target in any_page()) {
        let location = MemoryLocation::with_hash(&start.href());
        let router = HashRouter::new(location.clone());

        router.navigate(target).unwrap();

        prop_assert_eq!(location.hash(), target.href());
        prop_assert_eq!(Page::from_hash(&location.hash()), target);
        // A reload reads the same hash back
        let reloaded = HashRouter::new(MemoryLocation::with_hash(&location.hash()));
        prop_assert_eq!(reloaded.current_page(), target);
    }

    #[test]
    fn last_navigation_wins(targets in prop::collection::vec(any_page(), 1..20)) {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone());
        let seen = std::rc::Rc::new(std::cell::Cell::new(Page::Home));
        let sink = std::rc::Rc::clone(&seen);
        let _sub = router.mount(move |page| sink.set(page));

        for target in &targets {
            router.navigate(*target).unwrap();
        }

        let last = *targets.last().unwrap();
        prop_assert_eq!(seen.get(), last);
        prop_assert_eq!(router.current_page(), last);
    }
}

#[test]
fn normalization_examples() {
    assert_eq!(normalize(""), Page::Home);
    assert_eq!(normalize("bogus"), Page::Home);
    assert_eq!(normalize("tools"), Page::Tools);
}
