//! Index page previews: the most recently modified posts, shortened

use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::content::{store, MarkdownRenderer, Post, PostMetadata};

/// One post as shown on the index page
#[derive(Debug, Clone, Serialize)]
pub struct PreviewEntry {
    pub title: String,
    pub subtitle: String,
    /// Shortened body, converted to HTML
    pub body: String,
    #[serde(flatten)]
    pub meta: PostMetadata,
    pub id: String,
}

/// Metadata paths of the `count` most recently modified posts, newest first.
///
/// Posts with the same modification time are ordered by path.
pub fn select_recent(posts_dir: &Path, count: usize) -> Vec<PathBuf> {
    let mut candidates: Vec<(SystemTime, PathBuf)> = store::list_metadata_files(posts_dir)
        .into_iter()
        .filter_map(|path| match fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(modified) => Some((modified, path)),
            Err(e) => {
                tracing::warn!("Cannot read modification time of {:?}: {}", path, e);
                None
            }
        })
        .collect();

    candidates.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    candidates.truncate(count);
    candidates.into_iter().map(|(_, path)| path).collect()
}

/// Build the preview map for the index page, keyed by each post's URL path
/// (`posts/<year>/<slug-or-id>.html`) in recency order.
///
/// Bodies are cut to `max_length` characters (plus `...` when cut) before
/// Markdown conversion. Posts that cannot be read are left out.
pub fn build_previews(
    posts_dir: &Path,
    count: usize,
    max_length: usize,
    markdown: &MarkdownRenderer,
) -> IndexMap<String, PreviewEntry> {
    let mut previews = IndexMap::new();

    for meta_path in select_recent(posts_dir, count) {
        let post = match Post::load(&meta_path) {
            Ok(post) => post,
            Err(e) => {
                tracing::warn!("Leaving post out of the index: {}", e);
                continue;
            }
        };

        let key = post.url_path();
        let entry = PreviewEntry {
            body: markdown.render(&post.body.preview_text(max_length)),
            title: post.body.title,
            subtitle: post.body.subtitle,
            meta: post.meta,
            id: post.id,
        };

        if previews.insert(key.clone(), entry).is_some() {
            tracing::warn!("Two posts share the output path {}, keeping the older one", key);
        }
    }

    previews
}
