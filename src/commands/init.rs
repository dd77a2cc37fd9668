//! Initialize a new site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::config::{SiteConfig, DEFAULT_CONFIG_PATH};
use crate::templates::LIGHT_TEMPLATES;

const DEFAULT_CONFIG: &str = r#"# Site configuration

folders:
  posts: posts
  templates: templates
  site: site

# Template set under templates/
template: light

# Base URL used by blogurl(...)
home: /

# Index page
post-preview-count: 5
post-preview-length: 100

# Anything else is available to templates as config.<key>
title: My Blog
"#;

/// Create `config.yml`, the posts folder and the bundled `light` template set
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(DEFAULT_CONFIG_PATH);
    if config_path.exists() {
        bail!("Config file already exists: {:?}", config_path);
    }

    let config = SiteConfig::parse(DEFAULT_CONFIG)?;

    // Create directory structure
    fs::create_dir_all(target_dir.join(&config.folders.posts))?;
    let template_dir = target_dir
        .join(&config.folders.templates)
        .join(&config.template);
    fs::create_dir_all(&template_dir)?;

    for (name, content) in LIGHT_TEMPLATES {
        let path = template_dir.join(name);
        if path.exists() {
            tracing::info!("Keeping existing template {:?}", path);
            continue;
        }
        fs::write(&path, content)?;
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::debug!("Wrote {:?}", config_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;

    #[test]
    fn test_init_creates_layout() {
        let tmp = tempfile::tempdir().unwrap();
        init_site(tmp.path()).unwrap();

        let site = Site::load(tmp.path(), Path::new(DEFAULT_CONFIG_PATH)).unwrap();
        assert_eq!(site.config.template, "light");
        assert!(site.posts_dir.is_dir());
        assert!(site.template_dir.join("index.jinja").is_file());
        assert!(site.template_dir.join("post.jinja").is_file());
        assert_eq!(
            site.config.extra.get("title").and_then(|v| v.as_str()),
            Some("My Blog")
        );
    }

    #[test]
    fn test_init_refuses_existing_config() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(DEFAULT_CONFIG_PATH), "home: /x/\n").unwrap();
        assert!(init_site(tmp.path()).is_err());
        assert_eq!(
            fs::read_to_string(tmp.path().join(DEFAULT_CONFIG_PATH)).unwrap(),
            "home: /x/\n"
        );
    }
}
