pub mod config;
pub mod converter;
pub mod document;
pub mod location;
pub mod shell;
