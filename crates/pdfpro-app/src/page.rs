//! # Pages
//!
//! The closed set of top-level views and their URL-hash encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnknownPage;

/// Top-level views reachable from the header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Marketing landing page
    #[default]
    Home,
    /// JPG to PDF converter
    Tools,
    /// About the product
    About,
}

impl Page {
    /// Name used in the hash fragment
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Tools => "tools",
            Page::About => "about",
        }
    }

    /// Header label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Tools => "Tools",
            Page::About => "About",
        }
    }

    /// Document title shown while this page is active
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "JPG to PDF Pro - Free & Secure Image to PDF Converter",
            Page::Tools => "Converter Tool | JPG to PDF Pro",
            Page::About => "About Us | JPG to PDF Pro",
        }
    }

    /// Value assigned to `location.hash` to show this page (`/tools`)
    pub fn route(&self) -> String {
        format!("/{}", self.name())
    }

    /// Full fragment as read back from `location.hash` (`#/tools`)
    pub fn href(&self) -> String {
        format!("#/{}", self.name())
    }

    /// Get all pages in header order
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Tools, Page::About]
    }

    /// Derive the page from a raw `location.hash` value.
    ///
    /// The first two characters (`#/`) are dropped positionally, then the
    /// remainder is normalized. Hashes shorter than two characters resolve
    /// to [`Page::Home`].
    pub fn from_hash(hash: &str) -> Page {
        let rest = hash
            .char_indices()
            .nth(2)
            .map_or("", |(idx, _)| &hash[idx..]);
        normalize(rest)
    }
}

/// Map a route name to a page, falling back to [`Page::Home`].
///
/// Only the two non-default names are recognised; everything else,
/// including `"home"` and the empty string, lands on the home page.
pub fn normalize(name: &str) -> Page {
    match name {
        "tools" => Page::Tools,
        "about" => Page::About,
        _ => Page::Home,
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Page::Home),
            "tools" => Ok(Page::Tools),
            "about" => Ok(Page::About),
            other => Err(UnknownPage(other.to_string())),
        }
    }
}
