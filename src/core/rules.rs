use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::errors::RelayError;

/// Grammar of a link: scheme, dotted host and an optional path/query tail.
///
/// Word characters are ASCII only, so internationalized host names do not match.
pub const URL_PATTERN: &str = r"(http|https)://([0-9A-Za-z_-]+(?:(?:\.[0-9A-Za-z_-]+)+))([0-9A-Za-z_.,@?^=%&:/~+#-]*[0-9A-Za-z_@?^=%&/~+#-])?";

pub const TEXT_KEYWORDS: &[&str] = &[
    "ваканси",
    "работа",
    "позици",
    "тестировщик",
    "автоматизатор",
    "должность",
    "требования",
];

pub const LINK_KEYWORDS: &[&str] = &[
    "hh.ru", "job", "linkedin", "position", "vacancy", "work", "career",
];

pub const EXCLUSIONS: &[&str] = &[".slack.com", "linkedin.com/comm/profile"];

/// File form of the rules. Omitted fields keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RuleSetConfig {
    pub url_pattern: Option<String>,
    pub text_keywords: Option<Vec<String>>,
    pub link_keywords: Option<Vec<String>>,
    pub exclusions: Option<Vec<String>>,
}

/// Compiled classification rules, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub url_pattern: Regex,
    pub text_keywords: Vec<String>,
    pub link_keywords: Vec<String>,
    pub exclusions: Vec<String>,
}

fn lowered(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_lowercase()).collect()
}

fn lowered_owned(list: Vec<String>) -> Vec<String> {
    list.into_iter().map(|s| s.to_lowercase()).collect()
}

impl RuleSet {
    /// # Errors
    ///
    /// Returns `RelayError::Config` if the URL pattern does not compile.
    pub fn from_config(config: RuleSetConfig) -> Result<Self, RelayError> {
        let pattern = config.url_pattern.as_deref().unwrap_or(URL_PATTERN);
        Ok(Self {
            url_pattern: Regex::new(pattern)?,
            text_keywords: config
                .text_keywords
                .map_or_else(|| lowered(TEXT_KEYWORDS), lowered_owned),
            link_keywords: config
                .link_keywords
                .map_or_else(|| lowered(LINK_KEYWORDS), lowered_owned),
            exclusions: config
                .exclusions
                .map_or_else(|| lowered(EXCLUSIONS), lowered_owned),
        })
    }

    /// Load rules from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Config` if the file cannot be read, parsed or compiled.
    pub fn from_file(path: &Path) -> Result<Self, RelayError> {
        let raw = std::fs::read_to_string(path)?;
        let config: RuleSetConfig = serde_json::from_str(&raw)?;
        Self::from_config(config)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            url_pattern: Regex::new(URL_PATTERN)
                .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles")),
            text_keywords: lowered(TEXT_KEYWORDS),
            link_keywords: lowered(LINK_KEYWORDS),
            exclusions: lowered(EXCLUSIONS),
        }
    }
}
