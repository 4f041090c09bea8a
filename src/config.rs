use std::path::PathBuf;

/// Where the routine's well-known files live.
///
/// Defaults to the home directory, the same three file names the autosave,
/// template, and tracking components have always used. A host application
/// can point `data_dir` elsewhere (and should call `ensure_dir` once if it
/// does).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoutineConfig {
    pub data_dir: PathBuf,
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

impl RoutineConfig {
    pub fn autosave_path(&self) -> PathBuf {
        self.data_dir.join("weekly_routine_autosave.json")
    }

    pub fn templates_path(&self) -> PathBuf {
        self.data_dir.join("weekly_routine_templates.json")
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("weekly_routine_history.json")
    }

    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_data_dir() {
        let config = RoutineConfig {
            data_dir: PathBuf::from("/tmp/routine"),
        };
        assert_eq!(
            config.autosave_path(),
            PathBuf::from("/tmp/routine/weekly_routine_autosave.json")
        );
        assert_eq!(
            config.templates_path(),
            PathBuf::from("/tmp/routine/weekly_routine_templates.json")
        );
        assert_eq!(
            config.history_path(),
            PathBuf::from("/tmp/routine/weekly_routine_history.json")
        );
    }
}
