pub mod async_handler;
pub mod dialog;
pub mod field;
pub mod host;
pub mod save;

use super::super::state::FooterState;
use super::action::Action;
use super::command::Command;

pub fn reduce(state: &mut FooterState, action: Action) -> Vec<Command> {
    match action {
        Action::Field(action) => field::reduce(state, action),
        Action::Dialog(action) => dialog::reduce(state, action),
        Action::Footer(action) => host::reduce_footer(state, action),
        Action::Host(action) => host::reduce(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}
