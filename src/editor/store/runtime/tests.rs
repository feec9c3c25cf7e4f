use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::{Builder, Handle};

use crate::domain::{Series, SeriesType};
use crate::editor::field::{EditField, RawValue};
use crate::editor::state::Selection;
use crate::editor::store::action::{Action, FieldAction, HostAction};
use crate::editor::SeriesEditorFooter;
use crate::infra::app_config::AppConfig;
use crate::infra::backend::{BackendCall, MemoryBackend};

fn series(id: i32) -> Series {
    Series {
        id,
        title: format!("Series {id}"),
        monitored: true,
        quality_profile_id: 1,
        language_profile_id: None,
        series_type: SeriesType::Standard,
        season_folder: false,
        root_folder_path: "/tv".into(),
        tags: Default::default(),
    }
}

fn footer_with(backend: Arc<MemoryBackend>) -> SeriesEditorFooter {
    let mut footer = SeriesEditorFooter::new(backend, Handle::current(), &AppConfig::default());
    footer.dispatch(Action::Host(HostAction::SelectionChanged(Selection::new([1, 2]))));
    footer
}

fn set(field: EditField, value: &str) -> Action {
    Action::Field(FieldAction::SetOverride {
        field,
        value: RawValue::from(value),
    })
}

#[tokio::test]
async fn test_save_runs_on_backend_and_resets() {
    let backend = Arc::new(MemoryBackend::new([series(1), series(2)]));
    let mut footer = footer_with(backend.clone());

    footer.dispatch(set(EditField::SeasonFolder, "yes"));
    assert_eq!(footer.outstanding, 1);
    assert!(footer.state.is_field_saving(EditField::SeasonFolder));

    footer.settle().await;

    assert!(backend.get(1).unwrap().season_folder);
    assert!(backend.get(2).unwrap().season_folder);
    assert!(footer.state.pending.is_pristine());
    assert!(!footer.state.is_saving());
}

#[tokio::test]
async fn test_poll_drains_completed_saves() {
    let backend = Arc::new(MemoryBackend::new([series(1), series(2)]));
    let mut footer = footer_with(backend.clone());

    footer.dispatch(set(EditField::SeriesType, "daily"));
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(footer.poll_action_messages());
    assert_eq!(footer.outstanding, 0);
    assert!(footer.state.pending.is_pristine());
    assert!(!footer.poll_action_messages());
}

#[tokio::test]
async fn test_skip_runtime_leaves_backend_untouched() {
    let backend = Arc::new(MemoryBackend::new([series(1), series(2)]));
    let mut footer = footer_with(backend.clone());
    footer.skip_runtime = true;

    footer.dispatch(set(EditField::SeriesType, "anime"));

    assert!(backend.calls().is_empty());
    assert_eq!(footer.outstanding, 0);
    assert_eq!(
        footer.state.pending.get(EditField::SeriesType),
        &RawValue::text("anime")
    );
}

#[tokio::test]
async fn test_failed_save_keeps_pending_override() {
    let backend = Arc::new(MemoryBackend::new([series(1), series(2)]));
    backend.set_fail_saves(true);
    let mut footer = footer_with(backend.clone());

    footer.dispatch(set(EditField::Monitored, "unmonitored"));
    footer.settle().await;

    assert_eq!(
        footer.state.pending.get(EditField::Monitored),
        &RawValue::text("unmonitored")
    );
    assert!(footer.view().save_error.is_some());
    assert!(matches!(backend.calls().as_slice(), [BackendCall::Save(_)]));
    assert!(backend.get(1).unwrap().monitored);
}

#[test]
fn test_dispatch_outside_runtime_spawns_on_handle() {
    let rt = Builder::new_current_thread().enable_all().build().unwrap();
    let backend = Arc::new(MemoryBackend::new([series(1), series(2)]));
    let mut footer =
        SeriesEditorFooter::new(backend.clone(), rt.handle().clone(), &AppConfig::default());
    footer.dispatch(Action::Host(HostAction::SelectionChanged(Selection::new([1]))));

    footer.dispatch(set(EditField::SeasonFolder, "yes"));
    assert_eq!(footer.outstanding, 1);

    rt.block_on(footer.settle());

    assert!(backend.get(1).unwrap().season_folder);
    assert!(!backend.get(2).unwrap().season_folder);
    assert!(footer.state.pending.is_pristine());
}
