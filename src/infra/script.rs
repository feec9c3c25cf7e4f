//! Scripted user events for driving the footer without a UI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{ApplyTagsMode, DeleteOptions, SeriesId, TagId};
use crate::editor::{
    Action, DialogAction, EditField, FieldAction, FooterAction, HostAction, RawValue, Selection,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ScriptEvent {
    #[serde(rename_all = "camelCase")]
    Select {
        series_ids: Vec<SeriesId>,
    },
    Set {
        field: EditField,
        value: RawValue,
    },
    OpenTags,
    CloseTags,
    #[serde(rename_all = "camelCase")]
    ApplyTags {
        tags: BTreeSet<TagId>,
        apply_tags: ApplyTagsMode,
    },
    Organize,
    OpenDelete,
    CloseDelete,
    ConfirmDelete {
        #[serde(flatten)]
        options: DeleteOptions,
    },
}

impl From<ScriptEvent> for Action {
    fn from(event: ScriptEvent) -> Self {
        match event {
            ScriptEvent::Select { series_ids } => {
                Action::Host(HostAction::SelectionChanged(Selection::new(series_ids)))
            }
            ScriptEvent::Set { field, value } => {
                Action::Field(FieldAction::SetOverride { field, value })
            }
            ScriptEvent::OpenTags => Action::Dialog(DialogAction::OpenTags),
            ScriptEvent::CloseTags => Action::Dialog(DialogAction::CloseTags),
            ScriptEvent::ApplyTags { tags, apply_tags } => Action::Dialog(DialogAction::ApplyTags {
                tags,
                mode: apply_tags,
            }),
            ScriptEvent::Organize => Action::Footer(FooterAction::Organize),
            ScriptEvent::OpenDelete => Action::Dialog(DialogAction::OpenDelete),
            ScriptEvent::CloseDelete => Action::Dialog(DialogAction::CloseDelete),
            ScriptEvent::ConfirmDelete { options } => {
                Action::Dialog(DialogAction::ConfirmDelete { options })
            }
        }
    }
}

pub fn parse_script(json: &str) -> serde_json::Result<Vec<ScriptEvent>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_event_kind() {
        let events = parse_script(
            r#"[
                {"event": "select", "seriesIds": [1, 2]},
                {"event": "set", "field": "seasonFolder", "value": "yes"},
                {"event": "set", "field": "qualityProfileId", "value": 2},
                {"event": "openTags"},
                {"event": "applyTags", "tags": [3], "applyTags": "replace"},
                {"event": "organize"},
                {"event": "openDelete"},
                {"event": "confirmDelete", "deleteFiles": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(events.len(), 8);
        assert_eq!(
            events[2],
            ScriptEvent::Set {
                field: EditField::QualityProfileId,
                value: RawValue::Id(2),
            }
        );
        assert_eq!(
            events[7],
            ScriptEvent::ConfirmDelete {
                options: DeleteOptions {
                    delete_files: true,
                    add_import_list_exclusion: false,
                }
            }
        );
        assert!(matches!(
            Action::from(events[4].clone()),
            Action::Dialog(DialogAction::ApplyTags {
                mode: ApplyTagsMode::Replace,
                ..
            })
        ));
    }

    #[test]
    fn unknown_event_is_rejected() {
        assert!(parse_script(r#"[{"event": "undo"}]"#).is_err());
    }
}
