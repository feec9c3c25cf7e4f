use std::collections::BTreeSet;

use crate::domain::{ApplyTagsMode, DeleteOptions, SaveError, TagId};
use crate::editor::field::{EditField, RawValue};
use crate::editor::state::{FieldOptions, SaveRequestId, Selection};

#[derive(Debug, Clone)]
pub enum Action {
    Field(FieldAction),
    Dialog(DialogAction),
    Footer(FooterAction),
    Host(HostAction),
    Async(AsyncAction),
}

#[derive(Debug, Clone)]
pub enum FieldAction {
    /// A picker emitted a value for one field.
    SetOverride { field: EditField, value: RawValue },
}

#[derive(Debug, Clone)]
pub enum DialogAction {
    OpenTags,
    CloseTags,
    ApplyTags {
        tags: BTreeSet<TagId>,
        mode: ApplyTagsMode,
    },
    OpenDelete,
    CloseDelete,
    /// The delete dialog confirmed; the only path to a delete request.
    ConfirmDelete {
        options: DeleteOptions,
    },
}

#[derive(Debug, Clone)]
pub enum FooterAction {
    Organize,
}

#[derive(Debug, Clone)]
pub enum HostAction {
    SelectionChanged(Selection),
    /// Snapshot of a save state the host tracks itself.
    SaveStatusChanged {
        is_saving: bool,
        error: Option<SaveError>,
    },
    DeletingChanged(bool),
    OrganizingChanged(bool),
    ShowLanguageProfile(bool),
    OptionsLoaded(FieldOptions),
}

#[derive(Debug, Clone)]
pub enum AsyncAction {
    SaveFinished {
        request_id: SaveRequestId,
        result: Result<(), SaveError>,
    },
    OrganizeFinished(Result<(), String>),
    DeleteFinished(Result<(), String>),
}
