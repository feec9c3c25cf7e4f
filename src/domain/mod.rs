//! Domain types for the series editor
//! Series records, their editable attributes, and the errors the footer can report.

pub mod error;
pub mod series;

pub use error::*;
pub use series::*;
