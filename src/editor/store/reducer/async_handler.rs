use super::super::super::state::FooterState;
use super::super::action::AsyncAction;
use super::super::command::Command;
use super::save;

pub fn reduce(state: &mut FooterState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::SaveFinished { request_id, result } => save::finish(state, request_id, result),
        AsyncAction::OrganizeFinished(result) => {
            state.host.is_organizing = false;
            if let Err(err) = result {
                log::warn!("organize failed: {err}");
            }
            Vec::new()
        }
        AsyncAction::DeleteFinished(result) => {
            state.host.is_deleting = false;
            if let Err(err) = result {
                log::warn!("delete failed: {err}");
            }
            Vec::new()
        }
    }
}
