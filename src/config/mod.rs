use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_unselected")]
    pub unselected_category: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_categories() -> Vec<String> {
    ["Vacation", "Business", "Family Visit", "Adventure"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_unselected() -> String {
    "Select".to_string()
}
fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            categories: default_categories(),
            unselected_category: default_unselected(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("triplog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".triplog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("triplog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("triplog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::parse(&content)
    }

    /// Parse YAML config text and check the values serde cannot.
    pub fn parse(content: &str) -> AppResult<Self> {
        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// `date_format` is handed to chrono on every listing; an unknown
    /// specifier would make formatting fail, so it is rejected up front.
    pub fn validate(&self) -> AppResult<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Initialize configuration and database files, returning the DB path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            dir.join("triplog.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config.database)
    }

    /// Match user input against the configured categories (case-insensitive)
    /// and return the configured spelling. The placeholder is matched the
    /// same way and passed on so the submission check can reject it.
    pub fn resolve_category(&self, input: &str) -> AppResult<String> {
        if input.eq_ignore_ascii_case(&self.unselected_category) {
            return Ok(self.unselected_category.clone());
        }

        self.categories
            .iter()
            .find(|c| c.eq_ignore_ascii_case(input))
            .cloned()
            .ok_or_else(|| AppError::InvalidCategory {
                given: input.to_string(),
                allowed: self.categories.join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = Config::parse("database: /tmp/t.sqlite\n").unwrap();
        assert_eq!(cfg.categories.len(), 4);
        assert_eq!(cfg.unselected_category, "Select");
        assert_eq!(cfg.date_format, "%b %-d, %Y");

        let cfg = Config::parse("categories: [Work, Leisure]\n").unwrap();
        assert_eq!(cfg.database, Config::database_file().to_string_lossy());
        assert_eq!(cfg.categories, vec!["Work", "Leisure"]);
    }

    #[test]
    fn unknown_date_specifier_is_rejected() {
        let err = Config::parse("date_format: \"%Q\"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(ref m) if m.contains("%Q")));

        assert!(Config::parse("date_format: \"%d/%m/%Y\"\n").is_ok());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn category_lookup_is_case_insensitive() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_category("family visit").unwrap(), "Family Visit");
        assert_eq!(cfg.resolve_category("Select").unwrap(), "Select");
        assert_eq!(cfg.resolve_category("select").unwrap(), "Select");
        assert!(matches!(
            cfg.resolve_category("Cruise"),
            Err(AppError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn custom_category_set() {
        let cfg: Config = serde_yaml::from_str(
            "database: x\ncategories: [Work, Leisure]\nunselected_category: '-'\n",
        )
        .unwrap();
        assert_eq!(cfg.resolve_category("leisure").unwrap(), "Leisure");
        assert!(cfg.resolve_category("Vacation").is_err());
    }
}
