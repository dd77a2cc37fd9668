//! Create a new post

use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use crate::content::{store, PostMetadata};
use crate::error::{CmsError, Result};
use crate::Site;

/// Create a post with a freshly generated identifier
pub fn create_post(site: &Site, date: Option<NaiveDate>, slug: &str, tags: &str) -> Result<PathBuf> {
    let id = Uuid::new_v4().to_string();
    create_post_with_id(site, &id, date, slug, tags)
}

/// Create `<posts>/<year>/<id>.yml` and an empty `<id>.md` next to it.
///
/// `tags` is split on commas as-is: no trimming, and an empty string yields
/// a single empty tag. Fails with [`CmsError::IdCollision`] before writing
/// anything if either file already exists.
pub fn create_post_with_id(
    site: &Site,
    id: &str,
    date: Option<NaiveDate>,
    slug: &str,
    tags: &str,
) -> Result<PathBuf> {
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let tags: Vec<String> = tags.split(',').map(str::to_string).collect();
    let meta = PostMetadata::new(date, Some(slug.to_string()), tags);

    let meta_path = site
        .posts_dir
        .join(meta.year().to_string())
        .join(format!("{}.{}", id, store::METADATA_EXT));
    let body_path = store::body_path(&meta_path);

    if meta_path.exists() || body_path.exists() {
        return Err(CmsError::IdCollision(id.to_string()));
    }

    store::write_metadata(&meta_path, &meta)?;
    fs::write(&body_path, "").map_err(|e| CmsError::io(&body_path, e))?;

    tracing::info!("Created: {:?}", meta_path);
    Ok(meta_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn site() -> (TempDir, Site) {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path(), SiteConfig::default());
        (tmp, site)
    }

    #[test]
    fn test_create_post_layout() {
        let (_tmp, site) = site();
        let date = NaiveDate::from_ymd_opt(2021, 7, 4).unwrap();
        let path = create_post_with_id(&site, "fixed-id", Some(date), "hello", "a,b").unwrap();

        assert_eq!(path, site.posts_dir.join("2021/fixed-id.yml"));
        let meta = store::read_metadata(&path).unwrap();
        assert_eq!(meta.slug.as_deref(), Some("hello"));
        assert_eq!(meta.date, date);
        assert_eq!(meta.tags, vec!["a", "b"]);

        let body = site.posts_dir.join("2021/fixed-id.md");
        assert_eq!(fs::read_to_string(body).unwrap(), "");
    }

    #[test]
    fn test_tags_are_not_trimmed() {
        let (_tmp, site) = site();
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let path = create_post_with_id(&site, "t1", Some(date), "", "a, b,,a").unwrap();
        let meta = store::read_metadata(&path).unwrap();
        assert_eq!(meta.tags, vec!["a", " b", "", "a"]);
        assert_eq!(meta.slug, None);

        let path = create_post_with_id(&site, "t2", Some(date), "", "").unwrap();
        assert_eq!(store::read_metadata(&path).unwrap().tags, vec![""]);
    }

    #[test]
    fn test_id_collision_keeps_first_post() {
        let (_tmp, site) = site();
        let date = NaiveDate::from_ymd_opt(2022, 3, 3).unwrap();
        let first = create_post_with_id(&site, "same", Some(date), "first", "x").unwrap();
        fs::write(store::body_path(&first), "# Edited\n").unwrap();

        let err = create_post_with_id(&site, "same", Some(date), "second", "y").unwrap_err();
        assert!(matches!(err, CmsError::IdCollision(ref id) if id == "same"));

        let meta = store::read_metadata(&first).unwrap();
        assert_eq!(meta.slug.as_deref(), Some("first"));
        assert_eq!(fs::read_to_string(store::body_path(&first)).unwrap(), "# Edited\n");
    }

    #[test]
    fn test_collision_on_body_only() {
        let (_tmp, site) = site();
        let date = NaiveDate::from_ymd_opt(2022, 3, 3).unwrap();
        let dir = site.posts_dir.join("2022");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("orphan.md"), "# Orphan\n").unwrap();

        assert!(matches!(
            create_post_with_id(&site, "orphan", Some(date), "", ""),
            Err(CmsError::IdCollision(_))
        ));
        assert!(!dir.join("orphan.yml").exists());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let (_tmp, site) = site();
        let a = create_post(&site, None, "", "").unwrap();
        let b = create_post(&site, None, "", "").unwrap();
        assert_ne!(a, b);
        let year = chrono::Local::now().date_naive().format("%Y").to_string();
        assert!(a.parent().unwrap().ends_with(year));
    }
}
