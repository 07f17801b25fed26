use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "faunagen.json";
const DEFAULT_TEMPLATE: &str = "animals_template.html";
const DEFAULT_OUTPUT: &str = "animals.html";
const DEFAULT_API_URL: &str = "https://api.api-ninjas.com/v1/animals";
const DEFAULT_FILTER_KEY: &str = "skin_type";

/// Configuration for faunagen, stored in ./faunagen.json. Every field has a
/// default so a missing or partial file still yields a working setup; CLI
/// flags override whatever is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaunagenConfig {
    /// Template file holding the placeholder token
    #[serde(default = "default_template")]
    pub template_path: String,

    /// Where the finished page is written
    #[serde(default = "default_output")]
    pub output_path: String,

    /// Base URL of the animal lookup API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Characteristic the filter prompt operates on (e.g. "skin_type")
    #[serde(default = "default_filter_key")]
    pub filter_key: String,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_filter_key() -> String {
    DEFAULT_FILTER_KEY.to_string()
}

impl Default for FaunagenConfig {
    fn default() -> Self {
        Self {
            template_path: default_template(),
            output_path: default_output(),
            api_url: default_api_url(),
            filter_key: default_filter_key(),
        }
    }
}

impl FaunagenConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}
