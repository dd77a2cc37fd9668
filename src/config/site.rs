//! Site configuration (config.yml)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CmsError, Result};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub folders: FoldersConfig,

    // Theme
    /// Name of the template set under `folders.templates`
    pub template: String,

    // URL
    /// Base URL every `blogurl(...)` is resolved against
    pub home: String,

    // Home page
    #[serde(rename = "post-preview-count")]
    pub post_preview_count: usize,
    #[serde(rename = "post-preview-length")]
    pub post_preview_length: usize,

    // Store any additional fields, templates see them under `config`.
    // Kept in file order so rendering `config` is stable across loads.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            folders: FoldersConfig::default(),
            template: "light".to_string(),
            home: "/".to_string(),
            post_preview_count: 5,
            post_preview_length: 100,
            extra: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CmsError::io(path, e))?;
        Self::parse(&content).map_err(|source| CmsError::MalformedConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from YAML text; an empty document means all defaults
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Folder names, relative to the site base directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldersConfig {
    pub posts: String,
    pub templates: String,
    pub site: String,
}

impl Default for FoldersConfig {
    fn default() -> Self {
        Self {
            posts: "posts".to_string(),
            templates: "templates".to_string(),
            site: "site".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.template, "light");
        assert_eq!(config.home, "/");
        assert_eq!(config.post_preview_count, 5);
        assert_eq!(config.post_preview_length, 100);
        assert_eq!(config.folders.site, "site");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
folders:
  posts: content
template: dark
home: https://blog.example.com/
post-preview-count: 3
title: My Blog
"#;
        let config = SiteConfig::parse(yaml).unwrap();
        assert_eq!(config.folders.posts, "content");
        // Unset folders keep their defaults
        assert_eq!(config.folders.templates, "templates");
        assert_eq!(config.template, "dark");
        assert_eq!(config.home, "https://blog.example.com/");
        assert_eq!(config.post_preview_count, 3);
        assert_eq!(config.post_preview_length, 100);
        assert_eq!(
            config.extra.get("title").and_then(|v| v.as_str()),
            Some("My Blog")
        );
    }

    #[test]
    fn test_extra_keys_keep_file_order() {
        let yaml = "title: T\nauthor: A\nlang: en\ntwitter: t\ngithub: g\nemail: e\nfoo: 1\nbar: 2\n";
        let first = SiteConfig::parse(yaml).unwrap();
        let second = SiteConfig::parse(yaml).unwrap();
        let keys: Vec<&str> = first.extra.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["title", "author", "lang", "twitter", "github", "email", "foo", "bar"]
        );
        assert!(first.extra.iter().eq(second.extra.iter()));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = SiteConfig::parse("  \n").unwrap();
        assert_eq!(config.template, "light");
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "post-preview-count: many\n").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, CmsError::MalformedConfig { .. }));
    }
}
