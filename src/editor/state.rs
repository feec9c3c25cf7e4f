use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{SaveError, SeriesId};

use super::field::{EditField, PendingEdits};

/// Identifier handed to each dispatched save so its completion can be matched.
pub type SaveRequestId = u64;

/// Series currently selected in the list. Owned by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub series_ids: Vec<SeriesId>,
}

impl Selection {
    pub fn new(series_ids: impl IntoIterator<Item = SeriesId>) -> Self {
        Self {
            series_ids: series_ids.into_iter().collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.series_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series_ids.is_empty()
    }
}

/// A named choice supplied by the host (quality profile, language profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOption {
    pub id: i32,
    pub name: String,
}

/// Externally supplied choice lists for the profile and folder pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    pub quality_profiles: Vec<NamedOption>,
    pub language_profiles: Vec<NamedOption>,
    pub root_folders: Vec<String>,
}

/// Open/closed state of the two confirmation dialogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    pub tags_open: bool,
    pub delete_open: bool,
}

/// In-flight saves and the outcome of the current save cycle.
///
/// A cycle spans from the first save starting while idle until nothing is
/// saving again.
#[derive(Debug, Clone, Default)]
pub struct SaveTracker {
    pub next_request_id: SaveRequestId,
    pub in_flight: BTreeSet<SaveRequestId>,
    /// Saving flag reported by a host that observes saves it did not start.
    pub external_saving: bool,
    pub cycle_failed: bool,
    pub last_error: Option<SaveError>,
}

impl SaveTracker {
    pub fn is_saving(&self) -> bool {
        self.external_saving || !self.in_flight.is_empty()
    }

    pub fn begin(&mut self) -> SaveRequestId {
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.in_flight.insert(id);
        id
    }
}

/// State the host owns and pushes into the footer.
#[derive(Debug, Clone, Default)]
pub struct HostState {
    pub selection: Selection,
    pub is_deleting: bool,
    pub is_organizing: bool,
    pub show_language_profile: bool,
    pub options: FieldOptions,
}

/// All footer state in one struct.
#[derive(Debug, Clone, Default)]
pub struct FooterState {
    pub pending: PendingEdits,
    pub dialogs: DialogState,
    /// Set when a tag change is dispatched, cleared with the pending edits.
    pub saving_tags: bool,
    pub save: SaveTracker,
    pub host: HostState,
}

impl FooterState {
    pub fn is_saving(&self) -> bool {
        self.save.is_saving()
    }

    /// True only for fields the user touched, while a save is running.
    pub fn is_field_saving(&self, field: EditField) -> bool {
        !self.host.selection.is_empty()
            && self.save.is_saving()
            && !self.pending.get(field).is_no_change()
    }

    pub fn is_field_tracked(&self, field: EditField) -> bool {
        field != EditField::LanguageProfileId || self.host.show_language_profile
    }
}
