use crate::model::{Category, Difficulty};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Last-chosen selections, persisted by the shell across launches.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub(crate) version: u32,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub category: Category,
}

fn default_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: 1,
            difficulty: Difficulty::default(),
            category: Category::default(),
        }
    }
}

impl Settings {
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(mut settings) = serde_json::from_str::<Settings>(&contents) {
                settings.migrate();
                return settings;
            }
        }
        Settings::default()
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        // Ensure the directory exists
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let contents = serde_json::to_string(self)?;
        fs::write(path, contents)
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }
}
