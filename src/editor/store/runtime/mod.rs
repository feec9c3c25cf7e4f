pub mod series;

#[cfg(test)]
mod tests;

use super::super::SeriesEditorFooter;
use super::command::Command;

pub fn run(footer: &mut SeriesEditorFooter, command: Command) {
    if footer.skip_runtime {
        log::debug!("runtime skipped: {command:?}");
        return;
    }
    match command {
        Command::SaveSelected(request) => series::save_selected(footer, request),
        Command::OrganizeSelected { series_ids } => series::organize(footer, series_ids),
        Command::DeleteSelected {
            series_ids,
            options,
        } => series::delete(footer, series_ids, options),
    }
}
