/// Shell Service
///
/// Reactive wrapper around the core `Shell`: current page and toast slot.
/// Provided through context so the header, toast host and pages share it.
use leptos::prelude::*;
use pdfpro_app::{AppConfig, HashRouter, NavItem, Page, Shell, Toast, ToastId, ToastKind};

use super::document::BrowserDocument;
use super::location::BrowserLocation;
use crate::error::WebResult;

/// Shared layout state
#[derive(Clone, Copy)]
pub struct ShellHandle {
    state: RwSignal<Shell>,
    page: Memo<Page>,
    toast: Memo<Option<Toast>>,
    config: StoredValue<AppConfig>,
}

impl ShellHandle {
    pub fn new(config: AppConfig) -> Self {
        let state = RwSignal::new(Shell::new());
        Self {
            state,
            page: Memo::new(move |_| state.with(Shell::page)),
            toast: Memo::new(move |_| state.with(|s| s.toasts().current().cloned())),
            config: StoredValue::new(config),
        }
    }

    /// Page on screen. Only notifies when the page actually changes.
    pub fn page(&self) -> Memo<Page> {
        self.page
    }

    /// Visible toast, if any
    pub fn toast(&self) -> Memo<Option<Toast>> {
        self.toast
    }

    /// Header entries, re-read whenever the shell changes
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.state.with(Shell::nav_items)
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Register the hashchange listener for the lifetime of the calling
    /// component, deriving the initial page immediately.
    pub fn mount_router(self) {
        let location = match BrowserLocation::from_window() {
            Ok(location) => location,
            Err(e) => {
                log::error!("Hash router not mounted: {e}");
                return;
            }
        };

        let router = HashRouter::new(location);
        let subscription = router.mount(move |page| self.enter(page));
        let subscription = StoredValue::new_local(subscription);

        on_cleanup(move || {
            log::debug!("Shell unmounting, releasing hash router");
            subscription.dispose();
        });
    }

    /// Request navigation. The page changes when the hashchange arrives.
    pub fn navigate(&self, target: Page) {
        if let Err(e) = Self::write_hash(target) {
            log::error!("Navigation to {target} failed: {e}");
            self.show_toast(format!("Could not open {}", target.label()), ToastKind::Error);
        }
    }

    fn write_hash(target: Page) -> WebResult<()> {
        let router = HashRouter::new(BrowserLocation::from_window()?);
        router.navigate(target)?;
        Ok(())
    }

    fn enter(&self, page: Page) {
        let transition = self.state.try_update(|shell| shell.enter(page)).flatten();
        if let Some(transition) = transition {
            log::info!("Page changed to {}", transition.to);
            match BrowserDocument::current() {
                Some(document) => transition.apply(&document),
                None => log::error!("Could not get window"),
            }
        }
    }

    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        log::info!("Toast ({kind}): {message}");
        self.state.update(|shell| {
            shell.show_toast(message, kind);
        });
    }

    pub fn dismiss_toast(&self) {
        self.state.update(|shell| {
            shell.dismiss_toast();
        });
    }

    /// Timer path: ignored if a newer toast replaced `id`
    pub fn expire_toast(&self, id: ToastId) {
        self.state.update(|shell| {
            shell.expire_toast(id);
        });
    }
}

/// Hook for using the shell handle
pub fn use_shell() -> ShellHandle {
    use_context::<ShellHandle>().expect("ShellHandle must be provided in context")
}
