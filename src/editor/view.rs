//! Render-ready snapshot of the footer: what each control shows and whether
//! it can be used.

use serde::Serialize;

use crate::domain::SeriesId;

use super::SeriesEditorFooter;
use super::field::{EditField, RawValue, SelectOption, static_options};
use super::state::{FooterState, NamedOption};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRow {
    pub field: EditField,
    pub label: &'static str,
    pub value: RawValue,
    pub options: Vec<SelectOption>,
    pub is_disabled: bool,
    pub is_saving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    pub is_disabled: bool,
    pub is_spinning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub fields: Vec<FieldRow>,
    pub selected_label: String,
    pub organize: ButtonView,
    pub tags: ButtonView,
    pub delete: ButtonView,
    pub tags_dialog_open: bool,
    /// Series handed to the delete dialog while it is open.
    pub delete_dialog: Option<Vec<SeriesId>>,
    pub save_error: Option<String>,
}

impl FooterView {
    pub fn from_state(state: &FooterState) -> Self {
        let host = &state.host;
        let nothing_selected = host.selection.is_empty();

        let fields = EditField::ALL
            .into_iter()
            .filter(|field| state.is_field_tracked(*field))
            .map(|field| FieldRow {
                field,
                label: field.label(),
                value: state.pending.get(field).clone(),
                options: options_for(state, field),
                is_disabled: nothing_selected,
                is_saving: state.is_field_saving(field),
            })
            .collect();

        Self {
            fields,
            selected_label: format!("{} Series Selected", host.selection.count()),
            organize: ButtonView {
                is_disabled: nothing_selected || host.is_organizing,
                is_spinning: host.is_organizing,
            },
            tags: ButtonView {
                is_disabled: nothing_selected || state.is_saving(),
                is_spinning: state.is_saving(),
            },
            delete: ButtonView {
                is_disabled: nothing_selected || host.is_deleting,
                is_spinning: host.is_deleting,
            },
            tags_dialog_open: state.dialogs.tags_open,
            delete_dialog: state
                .dialogs
                .delete_open
                .then(|| host.selection.series_ids.clone()),
            save_error: state.save.last_error.as_ref().map(|e| e.to_string()),
        }
    }

    pub fn field(&self, field: EditField) -> Option<&FieldRow> {
        self.fields.iter().find(|row| row.field == field)
    }
}

fn options_for(state: &FooterState, field: EditField) -> Vec<SelectOption> {
    if let Some(options) = static_options(field) {
        return options;
    }

    let named = |list: &[NamedOption]| {
        list.iter()
            .map(|o| SelectOption {
                key: o.id.to_string(),
                value: o.name.clone(),
                disabled: false,
            })
            .collect::<Vec<_>>()
    };

    let options = &state.host.options;
    let choices = match field {
        EditField::QualityProfileId => named(options.quality_profiles.as_slice()),
        EditField::LanguageProfileId => named(options.language_profiles.as_slice()),
        EditField::RootFolderPath => options
            .root_folders
            .iter()
            .map(|path| SelectOption {
                key: path.clone(),
                value: path.clone(),
                disabled: false,
            })
            .collect(),
        _ => Vec::new(),
    };

    std::iter::once(SelectOption::no_change())
        .chain(choices)
        .collect()
}

impl SeriesEditorFooter {
    pub fn view(&self) -> FooterView {
        FooterView::from_state(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::state::{FieldOptions, HostState, Selection};

    fn state(ids: &[i32], show_language_profile: bool) -> FooterState {
        FooterState {
            host: HostState {
                selection: Selection::new(ids.iter().copied()),
                show_language_profile,
                options: FieldOptions {
                    quality_profiles: vec![NamedOption {
                        id: 1,
                        name: "HD-1080p".into(),
                    }],
                    language_profiles: vec![],
                    root_folders: vec!["/tv".into()],
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn everything_disabled_without_selection() {
        let view = FooterView::from_state(&state(&[], true));
        assert!(view.fields.iter().all(|row| row.is_disabled && !row.is_saving));
        assert!(view.organize.is_disabled);
        assert!(view.tags.is_disabled);
        assert!(view.delete.is_disabled);
        assert_eq!(view.selected_label, "0 Series Selected");
    }

    #[test]
    fn language_row_hidden_unless_enabled() {
        let view = FooterView::from_state(&state(&[1], false));
        assert!(view.field(EditField::LanguageProfileId).is_none());
        assert_eq!(view.fields.len(), 5);

        let view = FooterView::from_state(&state(&[1], true));
        assert!(view.field(EditField::LanguageProfileId).is_some());
    }

    #[test]
    fn host_options_get_no_change_entry() {
        let view = FooterView::from_state(&state(&[1], true));
        let quality = view.field(EditField::QualityProfileId).unwrap();
        assert_eq!(quality.options[0], SelectOption::no_change());
        assert_eq!(quality.options[1].key, "1");
        assert_eq!(quality.options[1].value, "HD-1080p");

        let monitored = view.field(EditField::Monitored).unwrap();
        let disabled: Vec<_> = monitored
            .options
            .iter()
            .filter(|o| o.disabled)
            .map(|o| o.key.as_str())
            .collect();
        assert_eq!(disabled, vec!["noChange", "monitored"]);
    }

    #[test]
    fn busy_operations_disable_their_buttons() {
        let mut footer_state = state(&[1, 2], true);
        footer_state.host.is_organizing = true;
        footer_state.host.is_deleting = true;
        footer_state.dialogs.delete_open = true;

        let view = FooterView::from_state(&footer_state);
        assert!(view.organize.is_disabled && view.organize.is_spinning);
        assert!(view.delete.is_disabled && view.delete.is_spinning);
        assert!(!view.tags.is_disabled);
        assert_eq!(view.delete_dialog, Some(vec![1, 2]));
        assert_eq!(view.selected_label, "2 Series Selected");
    }
}
