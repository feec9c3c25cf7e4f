//! Infrastructure layer (adapters/implementations).
//!
//! Backends the footer persists through, config loading, and event scripts.

pub mod app_config;
pub mod backend;
pub mod script;
