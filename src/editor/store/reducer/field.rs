use super::super::super::field::{EditField, RawValue, translate};
use super::super::super::state::FooterState;
use super::super::action::FieldAction;
use super::super::command::{Command, SavePayload};
use super::save;

pub fn reduce(state: &mut FooterState, action: FieldAction) -> Vec<Command> {
    match action {
        FieldAction::SetOverride { field, value } => set_override(state, field, value),
    }
}

fn set_override(state: &mut FooterState, field: EditField, value: RawValue) -> Vec<Command> {
    if state.host.selection.is_empty() {
        log::debug!("ignoring {field} override: no series selected");
        return Vec::new();
    }
    if !state.is_field_tracked(field) {
        log::debug!("ignoring {field} override: field is hidden");
        return Vec::new();
    }

    let update = translate(field, &value);
    state.pending.set(field, value);

    match update {
        Ok(Some(update)) => vec![save::begin(state, SavePayload::Field(update))],
        Ok(None) => Vec::new(),
        Err(err) => {
            log::warn!("not dispatching override: {err}");
            Vec::new()
        }
    }
}
