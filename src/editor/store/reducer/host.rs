use super::super::super::state::FooterState;
use super::super::action::{FooterAction, HostAction};
use super::super::command::Command;
use super::save;

pub fn reduce(state: &mut FooterState, action: HostAction) -> Vec<Command> {
    match action {
        HostAction::SelectionChanged(selection) => {
            state.host.selection = selection;
            Vec::new()
        }
        HostAction::SaveStatusChanged { is_saving, error } => {
            save::host_status_changed(state, is_saving, error)
        }
        HostAction::DeletingChanged(is_deleting) => {
            state.host.is_deleting = is_deleting;
            Vec::new()
        }
        HostAction::OrganizingChanged(is_organizing) => {
            state.host.is_organizing = is_organizing;
            Vec::new()
        }
        HostAction::ShowLanguageProfile(show) => {
            state.host.show_language_profile = show;
            Vec::new()
        }
        HostAction::OptionsLoaded(options) => {
            state.host.options = options;
            Vec::new()
        }
    }
}

pub fn reduce_footer(state: &mut FooterState, action: FooterAction) -> Vec<Command> {
    match action {
        FooterAction::Organize => {
            if state.host.selection.is_empty() || state.host.is_organizing {
                return Vec::new();
            }
            state.host.is_organizing = true;
            vec![Command::OrganizeSelected {
                series_ids: state.host.selection.series_ids.clone(),
            }]
        }
    }
}
