//! Config file loading (TOML or YAML)

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::config::PartialOptions;
use crate::domain::model::OptionSet;
use crate::error::{PlannerError, PlannerResult};

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> PlannerResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(PlannerError::UnsupportedConfigFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Options may sit at the top level or under an `options` table
#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    options: Option<PartialOptions>,
    #[serde(flatten)]
    top_level: PartialOptions,
}

impl ConfigDocument {
    fn into_options(self) -> PartialOptions {
        match self.options {
            Some(table) => table.merge(self.top_level),
            None => self.top_level,
        }
    }
}

/// Load a config file into an option layer
pub fn load_config_file(path: &Path) -> PlannerResult<PartialOptions> {
    let format = ConfigFormat::from_path(path)?;
    info!("Loading configuration from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| PlannerError::ConfigRead {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_config(path, &content, format)
}

fn parse_config(path: &Path, content: &str, format: ConfigFormat) -> PlannerResult<PartialOptions> {
    let parse_err = |message: String| PlannerError::ConfigParse {
        path: path.display().to_string(),
        message,
    };

    let document: ConfigDocument = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string()))?,
        // An empty YAML document deserializes as null
        ConfigFormat::Yaml if content.trim().is_empty() => ConfigDocument::default(),
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?
        }
    };

    Ok(document.into_options())
}

/// Render the default option set as a config file template
pub fn render_defaults(format: ConfigFormat) -> PlannerResult<String> {
    let defaults = OptionSet::default();
    let rendered = match format {
        ConfigFormat::Toml => toml::to_string(&defaults).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::to_string(&defaults).map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| PlannerError::Serialization { message })
}
