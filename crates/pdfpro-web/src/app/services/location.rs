/// Browser Location Service
///
/// Implements the core `Location` seam on top of `window.location` and the
/// window's `hashchange` event.
use pdfpro_app::{Location, NavigationError, Subscription};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use crate::error::{WebError, WebResult};

const HASH_CHANGE: &str = "hashchange";

/// `window.location` handle
#[derive(Clone, Debug)]
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Bind to the global window
    pub fn from_window() -> WebResult<Self> {
        web_sys::window()
            .map(Self::new)
            .ok_or(WebError::Unavailable("window"))
    }
}

impl Location for BrowserLocation {
    fn hash(&self) -> String {
        self.window.location().hash().unwrap_or_else(|e| {
            let reason = WebError::js_message(&e);
            log::warn!("Could not read location hash: {reason}");
            String::new()
        })
    }

    fn set_hash(&self, hash: &str) -> Result<(), NavigationError> {
        self.window
            .location()
            .set_hash(hash)
            .map_err(|e| NavigationError::HashUpdate {
                hash: hash.to_string(),
                reason: WebError::js_message(&e),
            })
    }

    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
        let on_hash_change: Closure<dyn Fn(Event)> = Closure::new(move |_event: Event| listener());

        if let Err(e) = self
            .window
            .add_event_listener_with_callback(HASH_CHANGE, on_hash_change.as_ref().unchecked_ref())
        {
            let reason = WebError::js_message(&e);
            log::error!("Failed to register hashchange listener: {reason}");
            return Subscription::empty();
        }
        log::debug!("hashchange listener registered");

        let window = self.window.clone();
        Subscription::new(move || {
            if let Err(e) = window.remove_event_listener_with_callback(
                HASH_CHANGE,
                on_hash_change.as_ref().unchecked_ref(),
            ) {
                let reason = WebError::js_message(&e);
                log::warn!("Failed to remove hashchange listener: {reason}");
            }
            // Closure dropped here, after the browser let go of it
            drop(on_hash_change);
            log::debug!("hashchange listener removed");
        })
    }
}
