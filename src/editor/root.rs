//! Root footer struct.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::infra::app_config::AppConfig;
use crate::infra::backend::SeriesEditorBackend;

use super::state::{FooterState, HostState};
use super::store::Action;

/// Bulk-edit footer for the series list.
///
/// Owns the footer state, hands commands to the backend on `runtime`, and
/// receives completions back on `action_rx`. Dispatching does not need to
/// happen inside the runtime.
pub struct SeriesEditorFooter {
    pub state: FooterState,

    pub backend: Arc<dyn SeriesEditorBackend>,
    pub runtime: Handle,

    pub action_tx: mpsc::Sender<Action>,
    pub action_rx: mpsc::Receiver<Action>,

    /// Spawned backend calls whose completion has not been received yet.
    pub outstanding: usize,

    pub skip_runtime: bool,
}

impl SeriesEditorFooter {
    pub fn new(
        backend: Arc<dyn SeriesEditorBackend>,
        runtime: Handle,
        config: &AppConfig,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::channel(32);
        let state = FooterState {
            host: HostState {
                show_language_profile: config.show_language_profile,
                options: config.options.clone(),
                ..Default::default()
            },
            ..Default::default()
        };

        Self {
            state,
            backend,
            runtime,
            action_tx,
            action_rx,
            outstanding: 0,
            skip_runtime: false,
        }
    }
}

impl std::fmt::Debug for SeriesEditorFooter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesEditorFooter")
            .field("state", &self.state)
            .field("outstanding", &self.outstanding)
            .field("skip_runtime", &self.skip_runtime)
            .finish_non_exhaustive()
    }
}
