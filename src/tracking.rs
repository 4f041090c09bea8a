//! Append-style completion ledger and its aggregation queries.
//!
//! The ledger (`{"days":{<ISO date>:{<day name>:{<task name>:bool}}}}`) is
//! separate from the live schedule and grows without pruning. Every
//! operation here is best-effort: toggles log-and-drop on failure, and any
//! read or shape problem during aggregation collapses to zeroed stats.
//! Stats must never take the rest of the system down.

use chrono::{Datelike, Days, Local, NaiveDate};
use std::fs;
use std::path::PathBuf;

use crate::core::DaySchedule;
use crate::error::RoutineError;
use crate::json::{self, Object, Value};

const DATE_FMT: &str = "%Y-%m-%d";

/// Time-windowed completion counts plus the current streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub week_completed: u32,
    pub week_total: u32,
    pub month_completed: u32,
    pub month_total: u32,
    pub streak_days: u32,
}

pub struct CompletionTracker {
    path: PathBuf,
}

impl CompletionTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Record one completion toggle at `days[date][day_name][task_name]`,
    /// rewriting the whole ledger. Failures are logged, never propagated.
    pub fn record_toggle(&self, day_name: &str, task_name: &str, completed: bool, date: NaiveDate) {
        if let Err(e) = self.record_toggle_inner(day_name, task_name, completed, date) {
            log::warn!("recording completion toggle failed: {e}");
        }
    }

    fn record_toggle_inner(
        &self,
        day_name: &str,
        task_name: &str,
        completed: bool,
        date: NaiveDate,
    ) -> Result<(), RoutineError> {
        let mut root = self.ensure_root()?;
        root.ensure_object_mut("days")
            .ensure_object_mut(&date.format(DATE_FMT).to_string())
            .ensure_object_mut(day_name)
            .insert(task_name, Value::Bool(completed));
        fs::write(&self.path, json::to_text(&Value::Object(root)))?;
        Ok(())
    }

    /// Week/month completion counts and the streak, as of today.
    pub fn compute_stats(&self) -> Stats {
        self.compute_stats_at(Local::now().date_naive())
    }

    /// Same as [`compute_stats`](Self::compute_stats) with an explicit
    /// "today". Any failure yields zeroed stats.
    pub fn compute_stats_at(&self, today: NaiveDate) -> Stats {
        match self.compute_stats_inner(today) {
            Ok(stats) => stats,
            Err(e) => {
                log::warn!("stats aggregation failed: {e}");
                Stats::default()
            }
        }
    }

    fn compute_stats_inner(&self, today: NaiveDate) -> Result<Stats, RoutineError> {
        let root = self.ensure_root()?;
        let days = root
            .get("days")
            .and_then(Value::as_object)
            .ok_or(RoutineError::MalformedLedger)?;

        let week_start = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
        let week_end = week_start + Days::new(6);
        let month_start = first_of_month(today)?;
        let month_end = last_of_month(today)?;

        let mut stats = Stats::default();
        for (date_key, entry) in days.iter() {
            let date = NaiveDate::parse_from_str(date_key, DATE_FMT)
                .map_err(|_| RoutineError::InvalidDate(date_key.to_string()))?;
            let in_week = date >= week_start && date <= week_end;
            let in_month = date >= month_start && date <= month_end;
            if !in_week && !in_month {
                continue;
            }
            let (done, total) = count_entry(entry)?;
            if in_week {
                stats.week_completed += done;
                stats.week_total += total;
            }
            if in_month {
                stats.month_completed += done;
                stats.month_total += total;
            }
        }
        stats.streak_days = compute_streak(days, today)?;
        Ok(stats)
    }

    /// Read the ledger root, creating the empty `{"days":{}}` document on
    /// first touch.
    fn ensure_root(&self) -> Result<Object, RoutineError> {
        if !self.path.exists() {
            let mut root = Object::new();
            root.insert("days", Value::Object(Object::new()));
            fs::write(&self.path, json::to_text(&Value::Object(root.clone())))?;
            return Ok(root);
        }
        let parsed = json::parse(&fs::read_to_string(&self.path)?)?;
        match parsed {
            Value::Object(root) => Ok(root),
            _ => Err(RoutineError::MalformedLedger),
        }
    }
}

/// Completion percentage of the live schedule, rounded half-up; 0 when the
/// day has no tasks.
pub fn daily_completion_percent(schedule: &DaySchedule) -> u8 {
    let total = schedule.len();
    if total == 0 {
        return 0;
    }
    let done = schedule.tasks().iter().filter(|t| t.completed).count();
    percent(done as u32, total as u32)
}

fn percent(done: u32, total: u32) -> u8 {
    (100.0 * f64::from(done) / f64::from(total)).round() as u8
}

/// Sum one ledger date entry across its day names: `(completed, total)`.
/// Only an exact `true` counts as completed.
fn count_entry(entry: &Value) -> Result<(u32, u32), RoutineError> {
    let per_day = entry.as_object().ok_or(RoutineError::MalformedLedger)?;
    let mut done = 0;
    let mut total = 0;
    for (_, tasks) in per_day.iter() {
        let tasks = tasks.as_object().ok_or(RoutineError::MalformedLedger)?;
        total += tasks.len() as u32;
        done += tasks
            .iter()
            .filter(|(_, v)| **v == Value::Bool(true))
            .count() as u32;
    }
    Ok((done, total))
}

/// Walk backward from `today`; a day extends the streak only if its entry
/// exists, records at least one task, and rounds to >= 80% complete.
fn compute_streak(days: &Object, today: NaiveDate) -> Result<u32, RoutineError> {
    let mut streak = 0;
    let mut date = today;
    loop {
        let Some(entry) = days.get(&date.format(DATE_FMT).to_string()) else {
            break;
        };
        if entry.as_object().is_none() {
            break;
        }
        let (done, total) = count_entry(entry)?;
        if total == 0 || percent(done, total) < 80 {
            break;
        }
        streak += 1;
        date = date
            .pred_opt()
            .ok_or_else(|| RoutineError::InvalidDate("before calendar start".to_string()))?;
    }
    Ok(streak)
}

fn first_of_month(date: NaiveDate) -> Result<NaiveDate, RoutineError> {
    date.with_day(1)
        .ok_or_else(|| RoutineError::InvalidDate(date.to_string()))
}

fn last_of_month(date: NaiveDate) -> Result<NaiveDate, RoutineError> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| RoutineError::InvalidDate(date.to_string()))
}
