use serde::{Deserialize, Serialize};

use super::day::DaySchedule;
use super::task::Task;

/// The canonical day names, in week order.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One full week: exactly one `DaySchedule` per canonical day name, always
/// present and always in week order.
///
/// Loaded documents may carry missing or unknown day names; those arrive as
/// a plain day list from the persistence layer and are canonicalized here
/// via [`WeekSchedule::from_days`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    days: Vec<DaySchedule>,
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekSchedule {
    /// A week of seven empty days.
    pub fn new() -> Self {
        Self {
            days: DAY_NAMES.iter().map(|d| DaySchedule::new(*d)).collect(),
        }
    }

    /// Rebuild the canonical week from whatever days a load produced:
    /// missing days become empty, unknown names are dropped.
    pub fn from_days(found: Vec<DaySchedule>) -> Self {
        let mut found = found;
        let days = DAY_NAMES
            .iter()
            .map(|name| {
                match found.iter().position(|d| d.name() == *name) {
                    Some(i) => found.swap_remove(i),
                    None => DaySchedule::new(*name),
                }
            })
            .collect();
        Self { days }
    }

    /// Merge imported days into the current week: each incoming task is
    /// deep-copied into the matching day. Unknown day names are ignored.
    pub fn merge_days(&mut self, incoming: Vec<DaySchedule>) {
        for day in incoming {
            if let Some(current) = self.day_mut(day.name()) {
                for task in day.tasks() {
                    current.add_task(task.clone());
                }
            }
        }
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn day(&self, name: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.name() == name)
    }

    pub fn day_mut(&mut self, name: &str) -> Option<&mut DaySchedule> {
        self.days.iter_mut().find(|d| d.name() == name)
    }

    pub fn clear_day(&mut self, name: &str) {
        if let Some(day) = self.day_mut(name) {
            day.clear();
        }
    }

    /// Deep-copy one day's tasks over another (completion flags included),
    /// replacing the target's previous contents.
    pub fn copy_day(&mut self, from: &str, to: &str) -> bool {
        if from == to {
            return false;
        }
        let tasks: Vec<Task> = match self.day(from) {
            Some(day) => day.tasks().to_vec(),
            None => return false,
        };
        match self.day_mut(to) {
            Some(target) => {
                target.clear();
                for task in tasks {
                    target.add_task(task);
                }
                true
            }
            None => false,
        }
    }

    /// Deep-copy a template's tasks into each named day, completion flags
    /// reset. Days not in the week are skipped.
    pub fn apply_template(&mut self, day_names: &[String], tasks: &[Task]) {
        for name in day_names {
            if let Some(day) = self.day_mut(name) {
                for task in tasks {
                    let mut copy = task.clone();
                    copy.completed = false;
                    day.add_task(copy);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, start: &str) -> Task {
        Task::new(name, start, start, "Low", "Other")
    }

    #[test]
    fn new_week_has_all_seven_days_in_order() {
        let week = WeekSchedule::new();
        let names: Vec<&str> = week.days().iter().map(|d| d.name()).collect();
        assert_eq!(names, DAY_NAMES.to_vec());
    }

    #[test]
    fn from_days_fills_missing_and_drops_unknown() {
        let mut friday = DaySchedule::new("Friday");
        friday.add_task(task("Review", "16:00"));
        let mut bogus = DaySchedule::new("Funday");
        bogus.add_task(task("Nothing", "00:00"));
        let week = WeekSchedule::from_days(vec![friday, bogus]);
        let names: Vec<&str> = week.days().iter().map(|d| d.name()).collect();
        assert_eq!(names, DAY_NAMES.to_vec());
        assert_eq!(week.day("Friday").map(|d| d.len()), Some(1));
        assert_eq!(week.day("Monday").map(|d| d.len()), Some(0));
        assert!(week.day("Funday").is_none());
    }

    #[test]
    fn merge_days_appends_copies() {
        let mut week = WeekSchedule::new();
        if let Some(d) = week.day_mut("Monday") {
            d.add_task(task("Old", "08:00"));
        }
        let mut incoming = DaySchedule::new("Monday");
        incoming.add_task(task("New", "07:00"));
        week.merge_days(vec![incoming, DaySchedule::new("Funday")]);
        let names: Vec<&str> = week
            .day("Monday")
            .map(|d| d.tasks().iter().map(|t| t.name.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(names, vec!["New", "Old"]);
    }

    #[test]
    fn copy_day_is_deep() {
        let mut week = WeekSchedule::new();
        let mut done = task("Gym", "07:00");
        done.completed = true;
        if let Some(d) = week.day_mut("Monday") {
            d.add_task(done);
        }
        assert!(week.copy_day("Monday", "Tuesday"));
        assert!(week.day("Tuesday").is_some_and(|d| d.tasks()[0].completed));
        // Mutating the copy leaves the source untouched.
        if let Some(d) = week.day_mut("Tuesday") {
            d.set_completed(0, false);
        }
        assert!(week.day("Monday").is_some_and(|d| d.tasks()[0].completed));
        assert!(!week.copy_day("Monday", "Monday"));
    }

    #[test]
    fn apply_template_resets_completion_and_skips_unknown_days() {
        let mut week = WeekSchedule::new();
        let mut done = task("Stretch", "06:30");
        done.completed = true;
        week.apply_template(
            &["Monday".to_string(), "Funday".to_string()],
            &[done],
        );
        let monday = week.day("Monday").map(|d| d.tasks().to_vec()).unwrap_or_default();
        assert_eq!(monday.len(), 1);
        assert!(!monday[0].completed);
    }
}
