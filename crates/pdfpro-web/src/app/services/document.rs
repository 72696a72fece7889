use pdfpro_app::DocumentEffects;
use web_sys::Window;

/// `document.title` and viewport scroll, applied on page transitions
#[derive(Clone, Debug)]
pub struct BrowserDocument {
    window: Window,
}

impl BrowserDocument {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn current() -> Option<Self> {
        web_sys::window().map(Self::new)
    }
}

impl DocumentEffects for BrowserDocument {
    fn set_title(&self, title: &str) {
        match self.window.document() {
            Some(document) => document.set_title(title),
            None => log::error!("Could not get document"),
        }
    }

    fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
