//! The text-format schedule document:
//! `{"days":[{"day":...,"tasks":[{"time","endTime","taskName","priority","category","completed"}]}]}`.
//!
//! Saving is exact; loading favors resilience. Whole-document structure
//! failures surface as parse errors upstream, but within a well-formed
//! document a task missing its `time` or `taskName` is skipped, a missing
//! `endTime` falls back to `time`, and any other missing field coerces to
//! its textual placeholder rather than aborting the load.

use crate::core::{DaySchedule, Task, WeekSchedule};
use crate::json::{Object, Value};

pub fn week_to_value(week: &WeekSchedule) -> Value {
    let days: Vec<Value> = week
        .days()
        .iter()
        .map(|day| {
            let tasks: Vec<Value> = day.tasks().iter().map(task_to_value).collect();
            let mut obj = Object::new();
            obj.insert("day", Value::from(day.name()));
            obj.insert("tasks", Value::Array(tasks));
            Value::Object(obj)
        })
        .collect();
    let mut root = Object::new();
    root.insert("days", Value::Array(days));
    Value::Object(root)
}

/// Read back whatever days the document holds, in document order.
/// Canonicalization to the 7-day week is the caller's concern.
pub fn days_from_value(root: &Value) -> Vec<DaySchedule> {
    let mut out = Vec::new();
    let days = root
        .as_object()
        .and_then(|obj| obj.get("days"))
        .and_then(Value::as_array)
        .unwrap_or_default();
    for entry in days {
        let Some(day_obj) = entry.as_object() else {
            continue;
        };
        let name = field_text(day_obj, "day");
        let mut schedule = DaySchedule::new(name);
        if let Some(tasks) = day_obj.get("tasks").and_then(Value::as_array) {
            for task_value in tasks {
                if let Some(task) = task_from_value(task_value) {
                    schedule.add_task(task);
                }
            }
        }
        out.push(schedule);
    }
    out
}

pub(crate) fn task_to_value(task: &Task) -> Value {
    let mut obj = Object::new();
    obj.insert("time", Value::from(task.start.as_str()));
    obj.insert("endTime", Value::from(task.end.as_str()));
    obj.insert("taskName", Value::from(task.name.as_str()));
    obj.insert("priority", Value::from(task.priority.as_str()));
    obj.insert("category", Value::from(task.category.as_str()));
    obj.insert("completed", Value::Bool(task.completed));
    Value::Object(obj)
}

/// Decode one task object. `None` when the entry has no usable start time
/// or name; such entries are skipped, not fatal.
pub(crate) fn task_from_value(value: &Value) -> Option<Task> {
    let obj = value.as_object()?;
    obj.get("time")?;
    obj.get("taskName")?;
    let start = field_text(obj, "time");
    let end = match obj.get("endTime") {
        Some(Value::Null) | None => start.clone(),
        Some(v) => v.display_string(),
    };
    let mut task = Task::new(
        field_text(obj, "taskName"),
        start,
        end,
        field_text(obj, "priority"),
        field_text(obj, "category"),
    );
    task.completed = obj.get("completed").and_then(Value::as_bool) == Some(true);
    Some(task)
}

/// A field as display text; absent fields read as the literal "null".
fn field_text(obj: &Object, key: &str) -> String {
    obj.get(key)
        .map(Value::display_string)
        .unwrap_or_else(|| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    fn sample_week() -> WeekSchedule {
        let mut week = WeekSchedule::new();
        if let Some(day) = week.day_mut("Tuesday") {
            let mut read = Task::new("Read", "21:00", "21:45", "Low", "Personal");
            read.completed = true;
            day.add_task(read);
            day.add_task(Task::new("Run", "06:00", "07:00", "High", "Exercise"));
        }
        week
    }

    #[test]
    fn week_round_trips() {
        let week = sample_week();
        let text = json::to_text(&week_to_value(&week));
        let days = days_from_value(&json::parse(&text).unwrap());
        assert_eq!(WeekSchedule::from_days(days), week);
    }

    #[test]
    fn document_shape_matches_the_contract() {
        let mut week = WeekSchedule::new();
        if let Some(day) = week.day_mut("Monday") {
            day.add_task(Task::new("Gym", "07:00", "08:00", "High", "Exercise"));
        }
        let text = json::to_text(&week_to_value(&week));
        assert!(text.starts_with("{\"days\":[{\"day\":\"Monday\",\"tasks\":["));
        assert!(text.contains(
            "{\"time\":\"07:00\",\"endTime\":\"08:00\",\"taskName\":\"Gym\",\
             \"priority\":\"High\",\"category\":\"Exercise\",\"completed\":false}"
        ));
    }

    #[test]
    fn missing_end_time_defaults_to_start() {
        let doc = r#"{"days":[{"day":"Monday","tasks":[
            {"time":"08:00","taskName":"Gym","priority":"High","category":"Exercise","completed":true}
        ]}]}"#;
        let days = days_from_value(&json::parse(doc).unwrap());
        let task = &days[0].tasks()[0];
        assert_eq!(task.end, "08:00");
        assert!(task.completed);
    }

    #[test]
    fn task_without_time_or_name_is_skipped() {
        let doc = r#"{"days":[{"day":"Monday","tasks":[
            {"taskName":"No time"},
            {"time":"08:00"},
            {"time":"09:00","taskName":"Kept"}
        ]}]}"#;
        let days = days_from_value(&json::parse(doc).unwrap());
        assert_eq!(days[0].len(), 1);
        assert_eq!(days[0].tasks()[0].name, "Kept");
    }

    #[test]
    fn null_fields_become_the_literal_placeholder() {
        let doc = r#"{"days":[{"day":"Monday","tasks":[
            {"time":"08:00","taskName":"Gym","priority":null}
        ]}]}"#;
        let days = days_from_value(&json::parse(doc).unwrap());
        let task = &days[0].tasks()[0];
        assert_eq!(task.priority, "null");
        assert_eq!(task.category, "null");
        assert!(!task.completed);
    }

    #[test]
    fn non_object_root_or_days_degrades_to_empty() {
        assert!(days_from_value(&json::parse("[1,2]").unwrap()).is_empty());
        assert!(days_from_value(&json::parse("{\"days\":5}").unwrap()).is_empty());
    }
}
