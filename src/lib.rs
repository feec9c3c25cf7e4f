//! Bulk-edit footer for a series list.
//!
//! `editor` holds the footer state machine, `infra` the backend seam, config
//! and script loading, and `domain` the series types they share.

pub mod domain;
pub mod editor;
pub mod infra;
