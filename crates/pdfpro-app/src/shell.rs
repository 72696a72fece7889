//! # Shell State
//!
//! Cross-page state owned by the top-level layout: the page currently on
//! screen and the toast slot. Page views never hold this; they get a
//! navigation or toast callback instead.

use crate::page::Page;
use crate::toast::{ToastController, ToastId, ToastKind};

/// Host document side effects applied on every page transition.
pub trait DocumentEffects {
    /// Set `document.title`.
    fn set_title(&self, title: &str);

    /// Scroll the viewport back to the top-left corner.
    fn scroll_to_top(&self);
}

/// A change of displayed page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTransition {
    /// Previous page, `None` for the initial mount
    pub from: Option<Page>,
    /// Page now shown
    pub to: Page,
}

impl PageTransition {
    /// Title to apply for the destination page
    pub fn title(&self) -> &'static str {
        self.to.title()
    }

    /// Apply title and scroll side effects. Both are idempotent.
    pub fn apply<D: DocumentEffects + ?Sized>(&self, document: &D) {
        document.set_title(self.title());
        document.scroll_to_top();
    }
}

/// Header navigation entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

/// Layout-owned state
#[derive(Clone, Debug, Default)]
pub struct Shell {
    page: Option<Page>,
    toasts: ToastController,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page on screen; home until the router has mounted
    pub fn page(&self) -> Page {
        self.page.unwrap_or_default()
    }

    /// Whether the router has delivered its initial page
    pub fn is_mounted(&self) -> bool {
        self.page.is_some()
    }

    /// Record the page derived from the hash.
    ///
    /// Returns a transition on the first call and whenever the page
    /// actually changes, `None` otherwise.
    pub fn enter(&mut self, page: Page) -> Option<PageTransition> {
        if self.page == Some(page) {
            return None;
        }
        let transition = PageTransition {
            from: self.page,
            to: page,
        };
        self.page = Some(page);
        tracing::info!(from = ?transition.from, to = %page, "page changed");
        Some(transition)
    }

    /// [`enter`](Self::enter) with the page derived from a raw hash
    pub fn sync_from_hash(&mut self, hash: &str) -> Option<PageTransition> {
        self.enter(Page::from_hash(hash))
    }

    /// Header entries with the current page marked active
    pub fn nav_items(&self) -> Vec<NavItem> {
        let current = self.page();
        Page::all()
            .iter()
            .map(|&page| NavItem {
                page,
                label: page.label(),
                active: page == current,
            })
            .collect()
    }

    pub fn toasts(&self) -> &ToastController {
        &self.toasts
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.toasts.show(message, kind)
    }

    pub fn dismiss_toast(&mut self) -> bool {
        self.toasts.dismiss()
    }

    pub fn expire_toast(&mut self, id: ToastId) -> bool {
        self.toasts.expire(id)
    }
}
