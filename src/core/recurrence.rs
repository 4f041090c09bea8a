use super::task::Task;
use super::week::WeekSchedule;

/// How many and which days receive a copy of a newly entered task.
///
/// `None` and `Weekly` behave identically (one copy on the current day);
/// both names are kept because the UI presents them as distinct choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Weekdays,
}

impl Recurrence {
    /// Map a UI label to a policy; anything unrecognized is `None`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Daily" => Self::Daily,
            "Weekly" => Self::Weekly,
            "Weekdays" => Self::Weekdays,
            _ => Self::None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Weekdays => "Weekdays",
        }
    }
}

fn is_weekend(name: &str) -> bool {
    name.eq_ignore_ascii_case("Saturday") || name.eq_ignore_ascii_case("Sunday")
}

/// Insert copies of `task` into the week according to `recurrence`.
///
/// Every inserted copy is independent; completing one never touches the
/// others. Insertion goes through `DaySchedule::add_task`, so the time
/// ordering holds on every affected day.
pub fn apply_recurrence(
    week: &mut WeekSchedule,
    current_day: &str,
    task: &Task,
    recurrence: Recurrence,
) {
    match recurrence {
        Recurrence::None | Recurrence::Weekly => {
            if let Some(day) = week.day_mut(current_day) {
                day.add_task(task.clone());
            }
        }
        Recurrence::Daily => {
            for day in day_names(week) {
                if let Some(schedule) = week.day_mut(&day) {
                    schedule.add_task(task.clone());
                }
            }
        }
        Recurrence::Weekdays => {
            for day in day_names(week) {
                if is_weekend(&day) {
                    continue;
                }
                if let Some(schedule) = week.day_mut(&day) {
                    schedule.add_task(task.clone());
                }
            }
        }
    }
}

/// Insert an independent copy of `task` into each named day. Names not
/// present in the week are silently skipped.
pub fn apply_to_days(week: &mut WeekSchedule, target_days: &[String], task: &Task) {
    for name in target_days {
        if let Some(day) = week.day_mut(name) {
            day.add_task(task.clone());
        }
    }
}

fn day_names(week: &WeekSchedule) -> Vec<String> {
    week.days().iter().map(|d| d.name().to_string()).collect()
}
