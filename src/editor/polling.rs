use super::SeriesEditorFooter;

impl SeriesEditorFooter {
    /// Dispatches every completion already received. Returns whether any arrived.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.outstanding = self.outstanding.saturating_sub(1);
            self.dispatch(action);
            any = true;
        }
        any
    }

    /// Waits until every spawned backend call has reported back.
    pub async fn settle(&mut self) {
        while self.outstanding > 0 {
            let Some(action) = self.action_rx.recv().await else {
                break;
            };
            self.outstanding -= 1;
            self.dispatch(action);
        }
    }
}
