use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SedgeError};
use crate::types::Asset;

pub const CONFIG_FILE: &str = "sedge.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_includes_dir")]
    pub includes_dir: PathBuf,
    #[serde(default = "default_layouts_dir")]
    pub layouts_dir: PathBuf,
    #[serde(default = "default_posts_dir")]
    pub posts_dir: PathBuf,
    #[serde(default)]
    pub passthrough: Vec<PathBuf>,
    #[serde(default = "default_filters")]
    pub filters: Vec<String>,
    #[serde(default = "default_collections")]
    pub collections: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            includes_dir: default_includes_dir(),
            layouts_dir: default_layouts_dir(),
            posts_dir: default_posts_dir(),
            passthrough: Vec::new(),
            filters: default_filters(),
            collections: default_collections(),
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("_site")
}

fn default_includes_dir() -> PathBuf {
    PathBuf::from("_includes")
}

fn default_layouts_dir() -> PathBuf {
    PathBuf::from("_layouts")
}

fn default_posts_dir() -> PathBuf {
    PathBuf::from("_posts")
}

fn default_filters() -> Vec<String> {
    ["excerpt", "date", "date_display", "groupby", "relative_url", "slugify"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn default_collections() -> Vec<String> {
    ["posts", "tag_list"].iter().map(|name| name.to_string()).collect()
}

pub fn load_config(input_dir: &Path) -> Result<SiteConfig> {
    let config_path = input_dir.join(CONFIG_FILE);

    if !config_path.exists() {
        return Err(SedgeError::ConfigNotFound { path: config_path });
    }

    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content).map_err(|error| SedgeError::TomlParse {
        path: config_path.clone(),
        message: error.to_string(),
    })?;

    Ok(config)
}

pub fn passthrough_assets(config: &SiteConfig) -> Vec<Asset> {
    config
        .passthrough
        .iter()
        .map(|entry| Asset {
            source: config.input_dir.join(entry),
            dest: entry.clone(),
        })
        .collect()
}
