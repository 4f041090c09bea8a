pub mod day;
pub mod recurrence;
pub mod task;
pub mod week;

pub use day::DaySchedule;
pub use recurrence::Recurrence;
pub use task::Task;
pub use week::{DAY_NAMES, WeekSchedule};
