//! The native binary snapshot: a whole-week dump for fast local round-trips.
//!
//! Engine-private, no cross-version guarantee. A four-byte magic/version
//! header guards the payload; any header or decode mismatch reads back as
//! `IncompatibleSnapshot` rather than a generic I/O error.

use std::fs;
use std::path::Path;

use crate::core::{DaySchedule, WeekSchedule};
use crate::error::RoutineError;

const MAGIC: &[u8; 4] = b"WRS1";

pub fn write_snapshot(week: &WeekSchedule, path: &Path) -> Result<(), RoutineError> {
    let payload = bincode::serialize(week.days())
        .map_err(|e| RoutineError::IncompatibleSnapshot(format!("encode failed: {e}")))?;
    let mut bytes = Vec::with_capacity(MAGIC.len() + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&payload);
    fs::write(path, bytes)?;
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<Vec<DaySchedule>, RoutineError> {
    let bytes = fs::read(path)?;
    let payload = bytes
        .strip_prefix(MAGIC)
        .ok_or_else(|| RoutineError::IncompatibleSnapshot("bad magic header".to_string()))?;
    bincode::deserialize(payload)
        .map_err(|e| RoutineError::IncompatibleSnapshot(format!("decode failed: {e}")))
}
