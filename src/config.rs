use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    scrape::{builtin_engines, SearchEngine},
};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36";
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ENGINE: &str = "Bing";

/// Scraper settings. Every field may be omitted from the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_results: usize,
    pub engines: Vec<SearchEngine>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_results: DEFAULT_MAX_RESULTS,
            engines: builtin_engines(),
        }
    }
}

impl ScrapeConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let config: Self = serde_json::from_reader(BufReader::new(File::open(path)?))?;

        for engine in &config.engines {
            engine.parsed_selector()?;
        }

        Ok(config)
    }

    /// Looks an engine up by name, ignoring case.
    pub fn engine(&self, name: &str) -> Result<&SearchEngine> {
        self.engines
            .iter()
            .find(|engine| engine.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::Generic(format!("Unknown search engine: {name}")))
    }
}
