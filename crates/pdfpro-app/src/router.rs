//! # Hash Router
//!
//! Derives the current [`Page`] from the URL hash and writes the hash on
//! navigation. The hash is the single source of truth: [`HashRouter::navigate`]
//! only edits the location, and the resulting change notification is what
//! moves the displayed page.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::errors::NavigationError;
use crate::page::Page;

/// Host location the router reads from and writes to.
///
/// Implemented by the browser binding in the web crate and by
/// [`MemoryLocation`] for tests and headless hosts.
pub trait Location {
    /// Current raw hash, including the leading `#` (empty when unset).
    fn hash(&self) -> String;

    /// Replace the hash. Hosts notify subscribers only if the value changed.
    fn set_hash(&self, hash: &str) -> Result<(), NavigationError>;

    /// Register a hash-change listener. The listener stays registered until
    /// the returned [`Subscription`] is dropped.
    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription;
}

/// Scoped listener registration. Dropping it deregisters the listener.
#[must_use = "dropping a Subscription immediately deregisters the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a release action, run exactly once on drop.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription that owns nothing.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Deregister now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Whether dropping this guard still has something to release.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Hash router over a [`Location`]
#[derive(Clone, Debug)]
pub struct HashRouter<L> {
    location: L,
}

impl<L: Location> HashRouter<L> {
    /// Create a router bound to `location`
    pub fn new(location: L) -> Self {
        Self { location }
    }

    /// Get the underlying location
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Page encoded by the current hash. Pure read.
    pub fn current_page(&self) -> Page {
        Page::from_hash(&self.location.hash())
    }

    /// Point the hash at `target`. In-memory state follows via the
    /// hash-change notification, never directly.
    pub fn navigate(&self, target: Page) -> Result<(), NavigationError> {
        tracing::debug!(page = %target, "navigating");
        self.location.set_hash(&target.route())
    }
}

impl<L: Location + Clone + 'static> HashRouter<L> {
    /// Start tracking the hash.
    ///
    /// Calls `on_change` once with the current page, then again after every
    /// hash change until the returned [`Subscription`] is dropped.
    pub fn mount(&self, on_change: impl Fn(Page) + 'static) -> Subscription {
        on_change(self.current_page());

        let location = self.location.clone();
        let subscription = self.location.subscribe(Box::new(move || {
            let page = Page::from_hash(&location.hash());
            tracing::trace!(%page, "hash changed");
            on_change(page);
        }));
        tracing::debug!("hash router mounted");
        subscription
    }
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct MemoryInner {
    hash: RefCell<String>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

/// In-memory [`Location`] with browser hash semantics.
///
/// Clones share state, like handles to the same `window.location`.
#[derive(Clone, Default)]
pub struct MemoryLocation {
    inner: Rc<MemoryInner>,
}

impl MemoryLocation {
    /// Create a location with an empty hash
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location whose hash is already set, as on a bookmarked load
    pub fn with_hash(hash: &str) -> Self {
        let location = Self::new();
        *location.inner.hash.borrow_mut() = with_leading_hash(hash);
        location
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        // Snapshot so listeners may read the hash or navigate again.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.inner.hash.borrow().clone()
    }

    fn set_hash(&self, hash: &str) -> Result<(), NavigationError> {
        let next = with_leading_hash(hash);
        let changed = {
            let mut current = self.inner.hash.borrow_mut();
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        };
        if changed {
            self.notify();
        }
        Ok(())
    }

    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::from(listener)));

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }
}

impl fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryLocation")
            .field("hash", &self.hash())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

fn with_leading_hash(hash: &str) -> String {
    if hash.is_empty() || hash == "#" {
        String::new()
    } else if hash.starts_with('#') {
        hash.to_string()
    } else {
        format!("#{hash}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<Page>>>, impl Fn(Page) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |page| sink.borrow_mut().push(page))
    }

    #[test]
    fn test_current_page_reads_hash() {
        let router = HashRouter::new(MemoryLocation::with_hash("#/about"));
        assert_eq!(router.current_page(), Page::About);

        let router = HashRouter::new(MemoryLocation::new());
        assert_eq!(router.current_page(), Page::Home);
    }

    #[test]
    fn test_navigate_writes_hash() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone());

        router.navigate(Page::Tools).unwrap();
        assert_eq!(location.hash(), "#/tools");
        assert_eq!(router.current_page(), Page::Tools);
    }

    #[test]
    fn test_mount_emits_initial_page() {
        let router = HashRouter::new(MemoryLocation::with_hash("#/tools"));
        let (seen, on_change) = recorder();

        let _sub = router.mount(on_change);
        assert_eq!(*seen.borrow(), vec![Page::Tools]);
    }

    #[test]
    fn test_navigate_flows_through_listener() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone());
        let (seen, on_change) = recorder();
        let _sub = router.mount(on_change);

        router.navigate(Page::About).unwrap();
        router.navigate(Page::Tools).unwrap();
        location.set_hash("#/garbage").unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![Page::Home, Page::About, Page::Tools, Page::Home]
        );
    }

    #[test]
    fn test_same_hash_does_not_notify() {
        let location = MemoryLocation::with_hash("#/tools");
        let router = HashRouter::new(location.clone());
        let (seen, on_change) = recorder();
        let _sub = router.mount(on_change);

        router.navigate(Page::Tools).unwrap();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_unmount_releases_listener() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone());
        let (seen, on_change) = recorder();

        let sub = router.mount(on_change);
        assert_eq!(location.listener_count(), 1);

        sub.unsubscribe();
        assert_eq!(location.listener_count(), 0);

        router.navigate(Page::About).unwrap();
        assert_eq!(*seen.borrow(), vec![Page::Home]);
    }

    #[test]
    fn test_remount_does_not_accumulate_listeners() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone());

        for _ in 0..3 {
            let (_, on_change) = recorder();
            let _sub = router.mount(on_change);
            assert_eq!(location.listener_count(), 1);
        }
        assert_eq!(location.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_location() {
        let location = MemoryLocation::new();
        let sub = location.subscribe(Box::new(|| {}));
        drop(location);
        // Release must not panic once the location is gone
        drop(sub);
    }

    #[test]
    fn test_empty_subscription() {
        let sub = Subscription::empty();
        assert!(!sub.is_active());
    }

    #[test]
    fn test_leading_hash_normalization() {
        assert_eq!(with_leading_hash("/tools"), "#/tools");
        assert_eq!(with_leading_hash("#/tools"), "#/tools");
        assert_eq!(with_leading_hash("#"), "");
        assert_eq!(with_leading_hash(""), "");
    }
}
