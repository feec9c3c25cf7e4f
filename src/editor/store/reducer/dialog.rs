use super::super::super::state::FooterState;
use super::super::action::DialogAction;
use super::super::command::{Command, SavePayload, TagUpdate};
use super::save;

pub fn reduce(state: &mut FooterState, action: DialogAction) -> Vec<Command> {
    match action {
        DialogAction::OpenTags => {
            if state.host.selection.is_empty() || state.is_saving() {
                return Vec::new();
            }
            state.dialogs.tags_open = true;
            Vec::new()
        }
        DialogAction::CloseTags => {
            state.dialogs.tags_open = false;
            Vec::new()
        }
        // The tags dialog only offers apply while open, so that is not re-checked.
        DialogAction::ApplyTags { tags, mode } => {
            state.saving_tags = true;
            state.dialogs.tags_open = false;
            vec![save::begin(
                state,
                SavePayload::Tags(TagUpdate {
                    tags,
                    apply_mode: mode,
                }),
            )]
        }
        DialogAction::OpenDelete => {
            if state.host.selection.is_empty() || state.host.is_deleting {
                return Vec::new();
            }
            state.dialogs.delete_open = true;
            Vec::new()
        }
        DialogAction::CloseDelete => {
            state.dialogs.delete_open = false;
            Vec::new()
        }
        DialogAction::ConfirmDelete { options } => {
            if !state.dialogs.delete_open || state.host.selection.is_empty() {
                log::debug!("ignoring delete confirmation outside the delete dialog");
                return Vec::new();
            }
            state.dialogs.delete_open = false;
            state.host.is_deleting = true;
            vec![Command::DeleteSelected {
                series_ids: state.host.selection.series_ids.clone(),
                options,
            }]
        }
    }
}
