//! Bulk-edit footer for the series list.
//!
//! The footer tracks, per field, whether the user picked an override, commits
//! each override as soon as it is picked, and clears all of them once the
//! save cycle they started completes without error. Tag and delete actions go
//! through their own confirmation dialogs.

pub mod field;
mod polling;
mod root;
pub mod state;
pub mod store;
pub mod view;

pub use field::{EditField, FieldUpdate, NO_CHANGE, PendingEdits, RawValue, SelectOption};
pub use root::SeriesEditorFooter;
pub use state::{
    DialogState, FieldOptions, FooterState, HostState, NamedOption, SaveRequestId, Selection,
};
pub use store::{
    Action, AsyncAction, Command, DialogAction, FieldAction, FooterAction, HostAction,
    SavePayload, SaveRequest, TagUpdate,
};
pub use view::{ButtonView, FieldRow, FooterView};
