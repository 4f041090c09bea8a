//! Multi-format schedule persistence.
//!
//! Three wire representations share one `save`/`load` surface: the text
//! format (the in-crate codec), the markup format, and the native binary
//! snapshot. `load` hands back the day list exactly as found on disk;
//! callers canonicalize it with `WeekSchedule::from_days` (or merge it with
//! `WeekSchedule::merge_days`).

pub mod markup;
pub mod schedule_json;
pub mod snapshot;

use std::fs;
use std::path::Path;

use crate::core::{DaySchedule, WeekSchedule};
use crate::error::RoutineError;
use crate::json;

/// On-disk representation of a schedule document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
    Snapshot,
}

impl Format {
    /// Pick a format from the target's suffix: `.json`, `.xml`, `.ser`
    /// (case-insensitive); anything else defaults to the text format.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if name.ends_with(".xml") {
            Self::Xml
        } else if name.ends_with(".ser") {
            Self::Snapshot
        } else {
            Self::Json
        }
    }
}

/// Write the week to `path` in the given format.
pub fn save(week: &WeekSchedule, path: &Path, format: Format) -> Result<(), RoutineError> {
    let result = match format {
        Format::Json => {
            log::info!("saving schedule as text format to {}", path.display());
            fs::write(path, json::to_text(&schedule_json::week_to_value(week))).map_err(Into::into)
        }
        Format::Xml => {
            log::info!("saving schedule as markup to {}", path.display());
            fs::write(path, markup::to_markup(week)).map_err(Into::into)
        }
        Format::Snapshot => {
            log::info!("saving schedule snapshot to {}", path.display());
            snapshot::write_snapshot(week, path)
        }
    };
    if let Err(ref e) = result {
        log::error!("save to {} failed: {e}", path.display());
    }
    result
}

/// Read a day list from `path` in the given format.
pub fn load(path: &Path, format: Format) -> Result<Vec<DaySchedule>, RoutineError> {
    let result = match format {
        Format::Json => {
            log::info!("loading text-format schedule from {}", path.display());
            load_json(path)
        }
        Format::Xml => {
            log::info!("loading markup schedule from {}", path.display());
            fs::read_to_string(path)
                .map(|text| markup::from_markup(&text))
                .map_err(Into::into)
        }
        Format::Snapshot => {
            log::info!("loading schedule snapshot from {}", path.display());
            snapshot::read_snapshot(path)
        }
    };
    if let Err(ref e) = result {
        log::error!("load from {} failed: {e}", path.display());
    }
    result
}

fn load_json(path: &Path) -> Result<Vec<DaySchedule>, RoutineError> {
    let text = fs::read_to_string(path)?;
    let root = json::parse(&text)?;
    Ok(schedule_json::days_from_value(&root))
}
