//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
pub mod reducer;
mod runtime;

pub use action::{Action, AsyncAction, DialogAction, FieldAction, FooterAction, HostAction};
pub use command::{Command, SavePayload, SaveRequest, TagUpdate};

use super::SeriesEditorFooter;

impl SeriesEditorFooter {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
