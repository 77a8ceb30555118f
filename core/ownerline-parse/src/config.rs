use crate::{CompanyKeywords, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration, read from JSON.
///
/// ```json
/// { "extra_company_keywords": ["cooperative", "pta"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Added to the default company keyword set.
    #[serde(default)]
    pub extra_company_keywords: Vec<String>,
}

impl ParseConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Builds the keyword set this configuration describes.
    pub fn company_keywords(&self) -> Result<CompanyKeywords> {
        CompanyKeywords::with_extra(&self.extra_company_keywords)
    }
}
