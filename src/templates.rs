//! Named library of reusable day templates.
//!
//! Templates are best-effort convenience, not the source of truth: the
//! library file (`{"templates":[{"name","tasks":[...]}]}`) is loaded once at
//! construction and rewritten after every mutation, and any load or save
//! failure is logged and swallowed — a corrupt file degrades to an empty
//! library. Copies go in and copies come out; callers never share task
//! instances with the stored templates.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Task;
use crate::error::RoutineError;
use crate::json::{self, Object, Value};
use crate::persist::schedule_json::{task_from_value, task_to_value};

pub struct TemplateLibrary {
    path: PathBuf,
    templates: Vec<Template>,
}

struct Template {
    name: String,
    tasks: Vec<Task>,
}

impl TemplateLibrary {
    /// Open the library at `path`, loading whatever is already there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let templates = match load_templates(&path) {
            Ok(templates) => templates,
            Err(e) => {
                log::warn!("template load from {} failed: {e}", path.display());
                Vec::new()
            }
        };
        Self { path, templates }
    }

    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Store a deep copy of `tasks` under `name`, overwriting any existing
    /// template of that name in place.
    pub fn save_template(&mut self, name: impl Into<String>, tasks: &[Task]) {
        let name = name.into();
        let copy = tasks.to_vec();
        match self.templates.iter_mut().find(|t| t.name == name) {
            Some(existing) => existing.tasks = copy,
            None => self.templates.push(Template { name, tasks: copy }),
        }
        self.persist();
    }

    /// A deep copy of the named template, or `None` if absent.
    pub fn get_template(&self, name: &str) -> Option<Vec<Task>> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.tasks.clone())
    }

    pub fn delete_template(&mut self, name: &str) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| t.name != name);
        let removed = self.templates.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&self) {
        let entries: Vec<Value> = self
            .templates
            .iter()
            .map(|template| {
                let tasks: Vec<Value> = template.tasks.iter().map(task_to_value).collect();
                let mut obj = Object::new();
                obj.insert("name", Value::from(template.name.as_str()));
                obj.insert("tasks", Value::Array(tasks));
                Value::Object(obj)
            })
            .collect();
        let mut root = Object::new();
        root.insert("templates", Value::Array(entries));
        if let Err(e) = fs::write(&self.path, json::to_text(&Value::Object(root))) {
            log::warn!("template save to {} failed: {e}", self.path.display());
        }
    }
}

fn load_templates(path: &Path) -> Result<Vec<Template>, RoutineError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let root = json::parse(&fs::read_to_string(path)?)?;
    let entries = root
        .as_object()
        .and_then(|obj| obj.get("templates"))
        .and_then(Value::as_array)
        .unwrap_or_default();
    let mut out = Vec::new();
    for entry in entries {
        let Some(obj) = entry.as_object() else {
            continue;
        };
        let Some(name) = obj.get("name").map(Value::display_string) else {
            continue;
        };
        let tasks = obj
            .get("tasks")
            .and_then(Value::as_array)
            .unwrap_or_default()
            .iter()
            .filter_map(task_from_value)
            .collect();
        out.push(Template { name, tasks });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, start: &str) -> Task {
        Task::new(name, start, start, "Medium", "Other")
    }

    #[test]
    fn save_get_delete_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates.json");
        let mut lib = TemplateLibrary::open(&path);
        assert!(lib.is_empty());

        lib.save_template("Workday", &[task("Standup", "09:30")]);
        lib.save_template("Rest", &[task("Sleep in", "10:00")]);
        assert_eq!(lib.names(), vec!["Workday", "Rest"]);

        assert!(lib.get_template("Workday").is_some());
        assert!(lib.get_template("Missing").is_none());

        assert!(lib.delete_template("Workday"));
        assert!(!lib.delete_template("Workday"));
        assert_eq!(lib.names(), vec!["Rest"]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let dir = tempfile::tempdir().unwrap();
        let mut lib = TemplateLibrary::open(dir.path().join("templates.json"));
        lib.save_template("a", &[task("One", "08:00")]);
        lib.save_template("b", &[task("Two", "09:00")]);
        lib.save_template("a", &[task("Three", "10:00"), task("Four", "11:00")]);
        assert_eq!(lib.names(), vec!["a", "b"]);
        assert_eq!(lib.get_template("a").map(|t| t.len()), Some(2));
    }

    #[test]
    fn returned_copies_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut lib = TemplateLibrary::open(dir.path().join("templates.json"));
        lib.save_template("Workday", &[task("Standup", "09:30")]);

        let mut copy = lib.get_template("Workday").unwrap();
        copy[0].completed = true;
        copy[0].name = "Mutated".to_string();

        let stored = lib.get_template("Workday").unwrap();
        assert!(!stored[0].completed);
        assert_eq!(stored[0].name, "Standup");
    }

    #[test]
    fn library_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates.json");
        {
            let mut lib = TemplateLibrary::open(&path);
            lib.save_template("Workday", &[task("Standup", "09:30"), task("Gym", "07:00")]);
        }
        let reopened = TemplateLibrary::open(&path);
        assert_eq!(reopened.names(), vec!["Workday"]);
        let tasks = reopened.get_template("Workday").unwrap();
        // Templates keep stored order, no time re-sort on load.
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "Standup");
    }

    #[test]
    fn template_tasks_without_time_or_name_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(
            &path,
            concat!(
                "{\"templates\":[{\"name\":\"Workday\",\"tasks\":[",
                "{\"time\":\"09:30\",\"taskName\":\"Standup\"},",
                "{\"taskName\":\"No time\"},",
                "{\"time\":\"12:00\"}",
                "]}]}"
            ),
        )
        .unwrap();
        let lib = TemplateLibrary::open(&path);
        let tasks = lib.get_template("Workday").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Standup");
    }

    #[test]
    fn corrupt_library_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(&path, "{\"templates\":[").unwrap();
        let lib = TemplateLibrary::open(&path);
        assert!(lib.is_empty());
    }
}
