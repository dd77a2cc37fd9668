//! cms: a small static blog generator
//!
//! Posts live under `posts/<year>/<id>.yml` (metadata) and
//! `posts/<year>/<id>.md` (body). Generation renders them through a
//! Tera template set into `site/index.html` and
//! `site/posts/<year>/<slug-or-id>.html`.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod templates;

pub use error::{CmsError, Result};

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// A site: its configuration plus the folders it resolves to
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Posts folder
    pub posts_dir: PathBuf,
    /// Folder of the selected template set
    pub template_dir: PathBuf,
    /// Output folder
    pub output_dir: PathBuf,
}

impl Site {
    /// Resolve the configured folders against `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref();
        let posts_dir = base_dir.join(&config.folders.posts);
        let template_dir = base_dir
            .join(&config.folders.templates)
            .join(&config.template);
        let output_dir = base_dir.join(&config.folders.site);

        Self {
            config,
            posts_dir,
            template_dir,
            output_dir,
        }
    }

    /// Load the site whose configuration file is `config_path`
    /// (relative paths are taken from `base_dir`)
    pub fn load<P: AsRef<Path>>(base_dir: P, config_path: &Path) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config = config::SiteConfig::load(base_dir.join(config_path))?;
        Ok(Self::new(base_dir, config))
    }

    /// Generate the static site
    pub fn generate(&self, force: bool) -> Result<generator::GenerateReport> {
        commands::generate::run(self, force)
    }

    /// Create a new post, returning the metadata path
    pub fn new_post(&self, date: Option<NaiveDate>, slug: &str, tags: &str) -> Result<PathBuf> {
        commands::new::create_post(self, date, slug, tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folders_resolve_against_base_dir() {
        let mut config = config::SiteConfig::default();
        config.folders.posts = "content".to_string();
        config.template = "dark".to_string();

        let site = Site::new("/srv/blog", config);
        assert_eq!(site.posts_dir, Path::new("/srv/blog/content"));
        assert_eq!(site.template_dir, Path::new("/srv/blog/templates/dark"));
        assert_eq!(site.output_dir, Path::new("/srv/blog/site"));
    }
}
