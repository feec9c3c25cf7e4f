//! Editable fields, the raw values pickers emit, and their translation into
//! batch-update payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{
    FooterError, LanguageProfileId, QualityProfileId, Series, SeriesType,
};

/// Picker key meaning "leave this field alone".
pub const NO_CHANGE: &str = "noChange";

/// A field that can be overridden for every selected series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditField {
    Monitored,
    QualityProfileId,
    LanguageProfileId,
    SeriesType,
    SeasonFolder,
    RootFolderPath,
}

impl EditField {
    /// Display order of the footer.
    pub const ALL: [EditField; 6] = [
        EditField::Monitored,
        EditField::QualityProfileId,
        EditField::LanguageProfileId,
        EditField::SeriesType,
        EditField::SeasonFolder,
        EditField::RootFolderPath,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monitored => "monitored",
            Self::QualityProfileId => "qualityProfileId",
            Self::LanguageProfileId => "languageProfileId",
            Self::SeriesType => "seriesType",
            Self::SeasonFolder => "seasonFolder",
            Self::RootFolderPath => "rootFolderPath",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Monitored => "Monitor Series",
            Self::QualityProfileId => "Quality Profile",
            Self::LanguageProfileId => "Language Profile",
            Self::SeriesType => "Series Type",
            Self::SeasonFolder => "Season Folder",
            Self::RootFolderPath => "Root Folder",
        }
    }
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditField {
    type Err = FooterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FooterError::UnknownField(s.to_string()))
    }
}

/// Value emitted by a field picker, stored verbatim as the pending override.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawRepr", into = "RawRepr")]
pub enum RawValue {
    #[default]
    NoChange,
    Id(i32),
    Text(String),
}

impl RawValue {
    pub fn is_no_change(&self) -> bool {
        matches!(self, RawValue::NoChange)
    }

    pub fn text(value: impl Into<String>) -> Self {
        let value: String = value.into();
        RawValue::from(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::NoChange => f.write_str(NO_CHANGE),
            RawValue::Id(id) => write!(f, "{id}"),
            RawValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        if value == NO_CHANGE {
            RawValue::NoChange
        } else {
            RawValue::Text(value)
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::from(value.to_string())
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Id(value)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawRepr {
    Id(i32),
    Text(String),
}

impl From<RawRepr> for RawValue {
    fn from(repr: RawRepr) -> Self {
        match repr {
            RawRepr::Id(id) => RawValue::Id(id),
            RawRepr::Text(text) => RawValue::from(text),
        }
    }
}

impl From<RawValue> for RawRepr {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::NoChange => RawRepr::Text(NO_CHANGE.to_string()),
            RawValue::Id(id) => RawRepr::Id(id),
            RawValue::Text(text) => RawRepr::Text(text),
        }
    }
}

/// Per-field overrides the user has expressed since the last successful save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingEdits {
    monitored: RawValue,
    quality_profile_id: RawValue,
    language_profile_id: RawValue,
    series_type: RawValue,
    season_folder: RawValue,
    root_folder_path: RawValue,
}

impl PendingEdits {
    pub fn get(&self, field: EditField) -> &RawValue {
        match field {
            EditField::Monitored => &self.monitored,
            EditField::QualityProfileId => &self.quality_profile_id,
            EditField::LanguageProfileId => &self.language_profile_id,
            EditField::SeriesType => &self.series_type,
            EditField::SeasonFolder => &self.season_folder,
            EditField::RootFolderPath => &self.root_folder_path,
        }
    }

    pub fn set(&mut self, field: EditField, value: RawValue) {
        *self.slot_mut(field) = value;
    }

    pub fn reset(&mut self) {
        *self = PendingEdits::default();
    }

    pub fn is_pristine(&self) -> bool {
        EditField::ALL
            .into_iter()
            .all(|field| self.get(field).is_no_change())
    }

    fn slot_mut(&mut self, field: EditField) -> &mut RawValue {
        match field {
            EditField::Monitored => &mut self.monitored,
            EditField::QualityProfileId => &mut self.quality_profile_id,
            EditField::LanguageProfileId => &mut self.language_profile_id,
            EditField::SeriesType => &mut self.series_type,
            EditField::SeasonFolder => &mut self.season_folder,
            EditField::RootFolderPath => &mut self.root_folder_path,
        }
    }
}

/// Typed single-field batch update. Serializes as a one-key object,
/// e.g. `{"monitored":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldUpdate {
    Monitored(bool),
    QualityProfileId(QualityProfileId),
    LanguageProfileId(LanguageProfileId),
    SeriesType(SeriesType),
    SeasonFolder(bool),
    RootFolderPath(String),
}

impl FieldUpdate {
    pub fn field(&self) -> EditField {
        match self {
            Self::Monitored(_) => EditField::Monitored,
            Self::QualityProfileId(_) => EditField::QualityProfileId,
            Self::LanguageProfileId(_) => EditField::LanguageProfileId,
            Self::SeriesType(_) => EditField::SeriesType,
            Self::SeasonFolder(_) => EditField::SeasonFolder,
            Self::RootFolderPath(_) => EditField::RootFolderPath,
        }
    }

    pub fn apply_to(&self, series: &mut Series) {
        match self {
            Self::Monitored(monitored) => series.monitored = *monitored,
            Self::QualityProfileId(id) => series.quality_profile_id = *id,
            Self::LanguageProfileId(id) => series.language_profile_id = Some(*id),
            Self::SeriesType(series_type) => series.series_type = *series_type,
            Self::SeasonFolder(season_folder) => series.season_folder = *season_folder,
            Self::RootFolderPath(path) => series.root_folder_path = path.clone(),
        }
    }
}

/// An entry of a picker's choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    fn new(key: &str, value: &str, disabled: bool) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            disabled,
        }
    }

    pub fn no_change() -> Self {
        Self::new(NO_CHANGE, "No Change", true)
    }
}

/// Fixed choice lists of the fields whose options the footer owns.
///
/// `monitored` is deliberately one-way in bulk: only `unmonitored` can be
/// committed, the `monitored` entry is present but disabled.
pub fn static_options(field: EditField) -> Option<Vec<SelectOption>> {
    match field {
        EditField::Monitored => Some(vec![
            SelectOption::no_change(),
            SelectOption::new("monitored", "Monitored", true),
            SelectOption::new("unmonitored", "Unmonitored", false),
        ]),
        EditField::SeasonFolder => Some(vec![
            SelectOption::no_change(),
            SelectOption::new("yes", "Yes", false),
            SelectOption::new("no", "No", false),
        ]),
        EditField::SeriesType => Some(vec![
            SelectOption::no_change(),
            SelectOption::new("standard", "Standard", false),
            SelectOption::new("daily", "Daily", false),
            SelectOption::new("anime", "Anime", false),
        ]),
        _ => None,
    }
}

fn is_disabled_choice(field: EditField, value: &RawValue) -> bool {
    let RawValue::Text(key) = value else {
        return false;
    };
    static_options(field)
        .map(|options| options.iter().any(|o| o.disabled && o.key == *key))
        .unwrap_or(false)
}

/// Translates a raw picker value into the update to dispatch.
///
/// `Ok(None)` means the value is stored but nothing is committed: the
/// `noChange` sentinel and disabled choices fall in this bucket.
pub fn translate(field: EditField, value: &RawValue) -> Result<Option<FieldUpdate>, FooterError> {
    if value.is_no_change() || is_disabled_choice(field, value) {
        return Ok(None);
    }

    let invalid = || FooterError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    };

    let update = match field {
        EditField::Monitored => match value {
            RawValue::Text(key) if key == "monitored" || key == "unmonitored" => {
                FieldUpdate::Monitored(key == "monitored")
            }
            _ => return Err(invalid()),
        },
        EditField::SeasonFolder => match value {
            RawValue::Text(key) if key == "yes" || key == "no" => {
                FieldUpdate::SeasonFolder(key == "yes")
            }
            _ => return Err(invalid()),
        },
        EditField::QualityProfileId => {
            FieldUpdate::QualityProfileId(parse_id(value).ok_or_else(invalid)?)
        }
        EditField::LanguageProfileId => {
            FieldUpdate::LanguageProfileId(parse_id(value).ok_or_else(invalid)?)
        }
        EditField::SeriesType => match value {
            RawValue::Text(key) => {
                FieldUpdate::SeriesType(key.parse().map_err(|_| invalid())?)
            }
            _ => return Err(invalid()),
        },
        EditField::RootFolderPath => match value {
            RawValue::Text(path) if !path.trim().is_empty() => {
                FieldUpdate::RootFolderPath(path.clone())
            }
            _ => return Err(invalid()),
        },
    };

    Ok(Some(update))
}

fn parse_id(value: &RawValue) -> Option<i32> {
    match value {
        RawValue::Id(id) => Some(*id),
        RawValue::Text(text) => text.trim().parse().ok(),
        RawValue::NoChange => None,
    }
}
