use crate::error::{HiveError, HiveResult};
use crate::geometry::{Coordinate, DEFAULT_MAX_LEAPS, LEAPS_LIMIT};
use crate::template::{Os, TemplateDefaults, TemplateLibrary, TemplateOverrides};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Static defaults injected into every session. Any field missing from a JSON file
/// falls back to the built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub center: Coordinate,
    pub zoom: u8,
    pub leaps: u32,
    pub steps: u32,
    pub max_steps: u32,
    pub max_leaps: u32,

    pub os: Os,
    pub script_delay: u64,
    pub rocketmap_directory: String,
    pub account_directory: String,

    #[serde(deserialize_with = "windows_templates")]
    pub windows_templates: TemplateDefaults,
    #[serde(deserialize_with = "linux_templates")]
    pub linux_templates: TemplateDefaults,
}

fn windows_templates<'de, D: Deserializer<'de>>(d: D) -> Result<TemplateDefaults, D::Error> {
    Ok(TemplateOverrides::deserialize(d)?.apply(TemplateDefaults::windows()))
}

fn linux_templates<'de, D: Deserializer<'de>>(d: D) -> Result<TemplateDefaults, D::Error> {
    Ok(TemplateOverrides::deserialize(d)?.apply(TemplateDefaults::linux()))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: 10,
            leaps: 1,
            steps: 18,
            max_steps: 100,
            max_leaps: DEFAULT_MAX_LEAPS,
            os: Os::Windows,
            script_delay: 300,
            rocketmap_directory: "D:\\RocketMap".to_string(),
            account_directory: "workers/".to_string(),
            windows_templates: TemplateDefaults::windows(),
            linux_templates: TemplateDefaults::linux(),
        }
    }
}

fn default_center() -> Coordinate {
    Coordinate::new_unchecked(39.7683, -86.1652)
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HiveResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HiveResult<()> {
        if self.max_steps == 0 {
            return Err(HiveError::Config("max_steps must be at least 1".into()));
        }
        if self.steps == 0 || self.steps > self.max_steps {
            return Err(HiveError::Config(format!(
                "default steps {} outside 1..={}",
                self.steps, self.max_steps
            )));
        }
        if self.max_leaps > LEAPS_LIMIT {
            return Err(HiveError::Config(format!(
                "max_leaps {} above limit {}",
                self.max_leaps, LEAPS_LIMIT
            )));
        }
        if self.leaps > self.max_leaps {
            return Err(HiveError::Config(format!(
                "default leaps {} outside 0..={}",
                self.leaps, self.max_leaps
            )));
        }
        Ok(())
    }

    pub fn template_library(&self) -> TemplateLibrary {
        TemplateLibrary::new(&self.windows_templates, &self.linux_templates)
    }
}
