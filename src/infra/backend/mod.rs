//! Persistence seam for the footer's batch actions.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{DeleteOptions, SaveError, SeriesId};
use crate::editor::SaveRequest;

pub use memory::{BackendCall, MemoryBackend};

#[async_trait]
pub trait SeriesEditorBackend: Send + Sync {
    /// Applies one partial update to every series in the request.
    async fn save_selected(&self, request: SaveRequest) -> Result<(), SaveError>;
    /// Renames files on disk to match the naming settings.
    async fn organize(&self, series_ids: Vec<SeriesId>) -> Result<()>;
    async fn delete(&self, series_ids: Vec<SeriesId>, options: DeleteOptions) -> Result<()>;
}
