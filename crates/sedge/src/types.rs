use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub path: PathBuf,
    pub slug: String,
    pub raw_content: String,
    pub html: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub url: String,
}

impl ContentItem {
    pub fn tags(&self) -> &[String] {
        self.metadata.get_list("tags")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Timestamp(DateTime<Utc>),
    Number(f64),
    List(Vec<String>),
    String(String),
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetadataValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetadataValue::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            MetadataValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(flatten)]
    pub raw: HashMap<String, MetadataValue>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.raw.get(key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(|v| v.as_str())
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.raw.get(key).and_then(|v| v.as_number())
    }

    pub fn get_list(&self, key: &str) -> &[String] {
        self.raw.get(key).and_then(|v| v.as_list()).unwrap_or(&[])
    }

    pub fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.raw.get(key).and_then(|v| v.as_timestamp())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagGroup<'a> {
    pub tag: String,
    pub items: Vec<&'a ContentItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub source: PathBuf,
    pub dest: PathBuf,
}
