//! # JPG to PDF Pro application core
//!
//! Headless state and rules shared by every front end:
//!
//! - [`page`]: the closed set of views and hash normalization
//! - [`router`]: hash routing over an abstract [`Location`]
//! - [`toast`]: the single transient notification slot
//! - [`shell`]: cross-page state and page-transition side effects
//! - [`tools`]: the converter page's file queue and status machine
//! - [`config`]: TOML-backed application settings
//!
//! Nothing here touches the DOM. Browser bindings live in `pdfpro-web`.

pub mod config;
pub mod errors;
pub mod page;
pub mod router;
pub mod shell;
pub mod toast;
pub mod tools;

pub use config::AppConfig;
pub use errors::{ConfigError, NavigationError, QueueError, UnknownPage};
pub use page::{normalize, Page};
pub use router::{HashRouter, Location, MemoryLocation, Subscription};
pub use shell::{DocumentEffects, NavItem, PageTransition, Shell};
pub use toast::{Toast, ToastController, ToastId, ToastKind, ToastState};
pub use tools::{
    conversion_toast, format_size, AddReport, ConversionQueue, ConversionStatus, FileId,
    QueueLimits, QueuedFile, ToastRequest,
};
