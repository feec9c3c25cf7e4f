use super::super::super::state::{FooterState, SaveRequestId};
use super::super::command::{Command, SaveRequest, SavePayload};
use crate::domain::SaveError;

/// Starts a save for the current selection and returns the command carrying it.
pub fn begin(state: &mut FooterState, payload: SavePayload) -> Command {
    let request_id = state.save.begin();
    state.save.last_error = None;
    log::debug!("save #{request_id} dispatched: {payload:?}");
    Command::SaveSelected(SaveRequest {
        request_id,
        series_ids: state.host.selection.series_ids.clone(),
        payload,
    })
}

/// Edge-triggered reset. Fires only on saving -> idle without an error.
pub fn on_save_cycle_completed(
    state: &mut FooterState,
    was_saving: bool,
    is_now_saving: bool,
    had_error: bool,
) {
    if !(was_saving && !is_now_saving && !had_error) {
        return;
    }
    log::info!("save cycle completed, clearing pending overrides");
    state.pending.reset();
    state.saving_tags = false;
}

/// Completion of one dispatched save.
pub fn finish(
    state: &mut FooterState,
    request_id: SaveRequestId,
    result: Result<(), SaveError>,
) -> Vec<Command> {
    let was_saving = state.save.is_saving();
    if !state.save.in_flight.remove(&request_id) {
        log::debug!("ignoring completion of unknown save #{request_id}");
        return Vec::new();
    }
    if let Err(err) = result {
        log::warn!("save #{request_id} failed: {err}");
        record_failure(state, err);
    }
    settle_cycle(state, was_saving);
    Vec::new()
}

/// Saving flag reported by the host, diffed against the previous state.
///
/// Only the error carried by an idle snapshot counts against the cycle. While
/// saving, the host may still report the error of an earlier attempt.
pub fn host_status_changed(
    state: &mut FooterState,
    is_saving: bool,
    error: Option<SaveError>,
) -> Vec<Command> {
    let was_saving = state.save.is_saving();
    state.save.external_saving = is_saving;
    match error {
        Some(err) if !is_saving => {
            log::warn!("host reported a failed save: {err}");
            record_failure(state, err);
        }
        Some(err) => log::debug!("ignoring stale save error while saving: {err}"),
        None => {}
    }
    settle_cycle(state, was_saving);
    Vec::new()
}

fn record_failure(state: &mut FooterState, err: SaveError) {
    state.save.cycle_failed = true;
    state.save.last_error = Some(err);
}

fn settle_cycle(state: &mut FooterState, was_saving: bool) {
    let is_now_saving = state.save.is_saving();
    let had_error = state.save.cycle_failed;
    on_save_cycle_completed(state, was_saving, is_now_saving, had_error);
    if !is_now_saving {
        state.save.cycle_failed = false;
    }
}
