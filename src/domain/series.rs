use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::FooterError;

/// Unique identifier for a series
pub type SeriesId = i32;

/// Identifier of a quality profile
pub type QualityProfileId = i32;

/// Identifier of a language profile
pub type LanguageProfileId = i32;

/// Identifier of a tag
pub type TagId = i32;

/// How episodes of a series are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    #[default]
    Standard,
    Daily,
    Anime,
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Daily => write!(f, "daily"),
            Self::Anime => write!(f, "anime"),
        }
    }
}

impl FromStr for SeriesType {
    type Err = FooterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "daily" => Ok(Self::Daily),
            "anime" => Ok(Self::Anime),
            _ => Err(FooterError::UnknownSeriesType(s.to_string())),
        }
    }
}

/// How a tag set combines with the tags already on each series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplyTagsMode {
    /// Union with existing tags
    #[default]
    Add,
    /// Remove the given tags, keep the rest
    Remove,
    /// Existing tags are dropped in favour of the given set
    Replace,
}

impl ApplyTagsMode {
    /// Combines `tags` into `existing` according to the mode.
    pub fn apply(self, existing: &mut BTreeSet<TagId>, tags: &BTreeSet<TagId>) {
        match self {
            Self::Add => existing.extend(tags.iter().copied()),
            Self::Remove => existing.retain(|tag| !tags.contains(tag)),
            Self::Replace => *existing = tags.clone(),
        }
    }
}

impl fmt::Display for ApplyTagsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
            Self::Replace => write!(f, "replace"),
        }
    }
}

impl FromStr for ApplyTagsMode {
    type Err = FooterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "replace" => Ok(Self::Replace),
            _ => Err(FooterError::UnknownApplyMode(s.to_string())),
        }
    }
}

/// A series record as held by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: SeriesId,
    pub title: String,
    #[serde(default)]
    pub monitored: bool,
    #[serde(default)]
    pub quality_profile_id: QualityProfileId,
    #[serde(default)]
    pub language_profile_id: Option<LanguageProfileId>,
    #[serde(default)]
    pub series_type: SeriesType,
    #[serde(default)]
    pub season_folder: bool,
    #[serde(default)]
    pub root_folder_path: String,
    #[serde(default)]
    pub tags: BTreeSet<TagId>,
}

/// Choices made in the delete confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOptions {
    /// Also remove the series folders from disk.
    #[serde(default)]
    pub delete_files: bool,
    /// Prevent the series from being re-added by import lists.
    #[serde(default)]
    pub add_import_list_exclusion: bool,
}
