use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{ApplyTagsMode, DeleteOptions, SeriesId, TagId};
use crate::editor::field::FieldUpdate;
use crate::editor::state::SaveRequestId;

/// Tag mutation applied to every selected series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagUpdate {
    pub tags: BTreeSet<TagId>,
    #[serde(rename = "applyTags")]
    pub apply_mode: ApplyTagsMode,
}

/// Body of a partial update: one field, or a tag change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavePayload {
    Field(FieldUpdate),
    Tags(TagUpdate),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    #[serde(skip)]
    pub request_id: SaveRequestId,
    pub series_ids: Vec<SeriesId>,
    #[serde(flatten)]
    pub payload: SavePayload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SaveSelected(SaveRequest),
    OrganizeSelected {
        series_ids: Vec<SeriesId>,
    },
    DeleteSelected {
        series_ids: Vec<SeriesId>,
        options: DeleteOptions,
    },
}
