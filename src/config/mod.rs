//! Configuration module for prefill
//!
//! Handles loading widget, summary and classifier settings from TOML files.

mod settings;

pub use settings::{Settings, BASE_URL_ENV};
