use super::super::super::SeriesEditorFooter;
use super::super::action::{Action, AsyncAction};
use super::super::command::SaveRequest;
use crate::domain::{DeleteOptions, SeriesId};

pub fn save_selected(footer: &mut SeriesEditorFooter, request: SaveRequest) {
    let backend = footer.backend.clone();
    let action_tx = footer.action_tx.clone();
    footer.outstanding += 1;

    footer.runtime.spawn(async move {
        let request_id = request.request_id;
        let result = backend.save_selected(request).await;

        if action_tx
            .send(Action::Async(AsyncAction::SaveFinished { request_id, result }))
            .await
            .is_err()
        {
            log::error!("footer dropped before save #{request_id} completed");
        }
    });
}

pub fn organize(footer: &mut SeriesEditorFooter, series_ids: Vec<SeriesId>) {
    let backend = footer.backend.clone();
    let action_tx = footer.action_tx.clone();
    footer.outstanding += 1;

    footer.runtime.spawn(async move {
        let result = backend
            .organize(series_ids)
            .await
            .map_err(|e| format!("Failed to organize series: {e}"));

        let _ = action_tx
            .send(Action::Async(AsyncAction::OrganizeFinished(result)))
            .await;
    });
}

pub fn delete(footer: &mut SeriesEditorFooter, series_ids: Vec<SeriesId>, options: DeleteOptions) {
    let backend = footer.backend.clone();
    let action_tx = footer.action_tx.clone();
    footer.outstanding += 1;

    footer.runtime.spawn(async move {
        let result = backend
            .delete(series_ids, options)
            .await
            .map_err(|e| format!("Failed to delete series: {e}"));

        let _ = action_tx
            .send(Action::Async(AsyncAction::DeleteFinished(result)))
            .await;
    });
}
