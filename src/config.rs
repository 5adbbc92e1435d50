use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};

use crate::constants::DEFAULT_MAPPING_FILE;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Mapping document used when no `--mapping` is given.
    pub mapping_file: PathBuf,
    /// Print the paste instructions after generating code.
    pub show_instructions: bool,
}

// Default values for the config
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mapping_file: DEFAULT_MAPPING_FILE.into(),
            show_instructions: true,
        }
    }
}

fn config_path() -> io::Result<PathBuf> {
    ProjectDirs::from("com", "GC2N64Remapper", "GC2N64Remapper")
        .map(|d| d.config_dir().join("config.toml"))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Could not determine config dir"))
}

impl AppConfig {
    pub fn load() -> io::Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let txt = fs::read_to_string(&path)?;
        Self::from_toml(&txt)
    }

    pub fn from_toml(txt: &str) -> io::Result<Self> {
        toml::from_str(txt).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("TOML parse error: {e}"))
        })
    }

    pub fn to_toml(&self) -> io::Result<String> {
        toml::to_string_pretty(self).map_err(io::Error::other)
    }

    /// Apply the given settings. Returns whether anything changed.
    pub fn update(
        &mut self,
        mapping_file: Option<PathBuf>,
        show_instructions: Option<bool>,
    ) -> bool {
        let before = self.clone();
        if let Some(mapping_file) = mapping_file {
            self.mapping_file = mapping_file;
        }
        if let Some(show_instructions) = show_instructions {
            self.show_instructions = show_instructions;
        }
        *self != before
    }

    pub fn save(&self) -> io::Result<PathBuf> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, self.to_toml()?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_export_file() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.mapping_file, PathBuf::from("gc_n64_mappings.json"));
        assert!(cfg.show_instructions);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = AppConfig::from_toml("show_instructions = false").unwrap();
        assert!(!cfg.show_instructions);
        assert_eq!(cfg.mapping_file, AppConfig::default().mapping_file);
    }

    #[test]
    fn update_reports_changes() {
        let mut cfg = AppConfig::default();
        assert!(!cfg.update(None, Some(true)));
        assert!(cfg.update(Some("pads/custom.json".into()), Some(false)));
        assert_eq!(cfg.mapping_file, PathBuf::from("pads/custom.json"));
        assert!(!cfg.show_instructions);
    }

    #[test]
    fn saved_settings_load_back() {
        let mut cfg = AppConfig::default();
        cfg.update(Some("pads/custom.json".into()), Some(false));

        let txt = cfg.to_toml().unwrap();
        assert!(txt.contains("show_instructions = false"));
        assert_eq!(AppConfig::from_toml(&txt).unwrap(), cfg);
    }

    #[test]
    fn invalid_toml_is_invalid_data() {
        let err = AppConfig::from_toml("show_instructions = ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
