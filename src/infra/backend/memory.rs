use anyhow::{Result, bail};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::SeriesEditorBackend;
use crate::domain::{DeleteOptions, SaveError, Series, SeriesId};
use crate::editor::{SavePayload, SaveRequest};

/// A call received by the memory backend, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Save(SaveRequest),
    Organize(Vec<SeriesId>),
    Delete {
        series_ids: Vec<SeriesId>,
        options: DeleteOptions,
    },
}

/// In-process series store.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    series: RwLock<BTreeMap<SeriesId, Series>>,
    calls: Mutex<Vec<BackendCall>>,
    fail_saves: AtomicBool,
    latency: Option<Duration>,
}

impl MemoryBackend {
    pub fn new(series: impl IntoIterator<Item = Series>) -> Self {
        Self {
            series: RwLock::new(series.into_iter().map(|s| (s.id, s)).collect()),
            ..Default::default()
        }
    }

    /// Delays every call, so saves overlap in tests.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Makes subsequent saves fail with `SaveError::Rejected`.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn series(&self) -> Vec<Series> {
        self.series.read().values().cloned().collect()
    }

    pub fn get(&self, id: SeriesId) -> Option<Series> {
        self.series.read().get(&id).cloned()
    }

    pub fn contains(&self, id: SeriesId) -> bool {
        self.series.read().contains_key(&id)
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl SeriesEditorBackend for MemoryBackend {
    async fn save_selected(&self, request: SaveRequest) -> Result<(), SaveError> {
        self.calls.lock().push(BackendCall::Save(request.clone()));
        self.simulate_latency().await;

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SaveError::Rejected("saves are disabled".into()));
        }

        let mut series = self.series.write();
        if let Some(missing) = request
            .series_ids
            .iter()
            .find(|id| !series.contains_key(*id))
        {
            return Err(SaveError::SeriesNotFound(*missing));
        }

        for id in &request.series_ids {
            let Some(record) = series.get_mut(id) else {
                continue;
            };
            match &request.payload {
                SavePayload::Field(update) => update.apply_to(record),
                SavePayload::Tags(update) => {
                    update.apply_mode.apply(&mut record.tags, &update.tags)
                }
            }
        }

        log::debug!(
            "saved {:?} for {} series",
            request.payload,
            request.series_ids.len()
        );
        Ok(())
    }

    async fn organize(&self, series_ids: Vec<SeriesId>) -> Result<()> {
        self.calls.lock().push(BackendCall::Organize(series_ids.clone()));
        self.simulate_latency().await;

        let series = self.series.read();
        for id in &series_ids {
            if !series.contains_key(id) {
                bail!("series {id} does not exist");
            }
        }
        log::info!("organized files for {} series", series_ids.len());
        Ok(())
    }

    async fn delete(&self, series_ids: Vec<SeriesId>, options: DeleteOptions) -> Result<()> {
        self.calls.lock().push(BackendCall::Delete {
            series_ids: series_ids.clone(),
            options,
        });
        self.simulate_latency().await;

        let mut series = self.series.write();
        for id in &series_ids {
            series.remove(id);
        }
        log::info!(
            "deleted {} series (delete_files={}, add_import_list_exclusion={})",
            series_ids.len(),
            options.delete_files,
            options.add_import_list_exclusion
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApplyTagsMode, SeriesType};
    use std::collections::BTreeSet;
    use crate::editor::{FieldUpdate, TagUpdate};

    fn series(id: SeriesId) -> Series {
        Series {
            id,
            title: format!("Series {id}"),
            monitored: true,
            quality_profile_id: 1,
            language_profile_id: None,
            series_type: SeriesType::Standard,
            season_folder: true,
            root_folder_path: "/tv".into(),
            tags: [1].into_iter().collect(),
        }
    }

    fn request(series_ids: Vec<SeriesId>, payload: SavePayload) -> SaveRequest {
        SaveRequest {
            request_id: 1,
            series_ids,
            payload,
        }
    }

    #[tokio::test]
    async fn applies_field_update_to_every_series() {
        let backend = MemoryBackend::new([series(1), series(2), series(3)]);
        backend
            .save_selected(request(
                vec![1, 2],
                SavePayload::Field(FieldUpdate::SeriesType(SeriesType::Anime)),
            ))
            .await
            .unwrap();

        assert_eq!(backend.get(1).unwrap().series_type, SeriesType::Anime);
        assert_eq!(backend.get(2).unwrap().series_type, SeriesType::Anime);
        assert_eq!(backend.get(3).unwrap().series_type, SeriesType::Standard);
    }

    #[tokio::test]
    async fn applies_tags_with_mode() {
        let backend = MemoryBackend::new([series(1)]);
        backend
            .save_selected(request(
                vec![1],
                SavePayload::Tags(TagUpdate {
                    tags: [2, 3].into_iter().collect(),
                    apply_mode: ApplyTagsMode::Add,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(backend.get(1).unwrap().tags, [1, 2, 3].into_iter().collect::<BTreeSet<_>>());

        backend
            .save_selected(request(
                vec![1],
                SavePayload::Tags(TagUpdate {
                    tags: [1].into_iter().collect(),
                    apply_mode: ApplyTagsMode::Remove,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(backend.get(1).unwrap().tags, [2, 3].into_iter().collect::<BTreeSet<_>>());
    }

    #[tokio::test]
    async fn unknown_series_rejects_whole_batch() {
        let backend = MemoryBackend::new([series(1)]);
        let err = backend
            .save_selected(request(
                vec![1, 9],
                SavePayload::Field(FieldUpdate::Monitored(false)),
            ))
            .await
            .unwrap_err();

        assert_eq!(err, SaveError::SeriesNotFound(9));
        assert!(backend.get(1).unwrap().monitored);
    }

    #[tokio::test]
    async fn failing_saves_are_recorded_but_not_applied() {
        let backend = MemoryBackend::new([series(1)]);
        backend.set_fail_saves(true);
        let result = backend
            .save_selected(request(
                vec![1],
                SavePayload::Field(FieldUpdate::SeasonFolder(false)),
            ))
            .await;

        assert!(matches!(result, Err(SaveError::Rejected(_))));
        assert!(backend.get(1).unwrap().season_folder);
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_series() {
        let backend = MemoryBackend::new([series(1), series(2)]);
        backend
            .delete(vec![1], DeleteOptions::default())
            .await
            .unwrap();
        assert!(!backend.contains(1));
        assert!(backend.contains(2));
    }
}
