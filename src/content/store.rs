//! Stateless reads and writes against the posts folder

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{PostBody, PostMetadata};
use crate::error::{CmsError, Result};

/// Extension of metadata files
pub const METADATA_EXT: &str = "yml";
/// Extension of body files
pub const BODY_EXT: &str = "md";

/// Recursively list every metadata file under `posts_dir`.
///
/// Entries are walked in file-name order, but callers should not rely on
/// any particular ordering.
pub fn list_metadata_files(posts_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(posts_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_metadata_file(e.path()))
        .map(|e| e.into_path())
        .collect()
}

/// Decode one metadata file
pub fn read_metadata(path: &Path) -> Result<PostMetadata> {
    let content = fs::read_to_string(path).map_err(|e| CmsError::io(path, e))?;
    PostMetadata::parse(&content).map_err(|source| CmsError::MalformedMetadata {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a metadata record, creating its year folder as needed
pub fn write_metadata(path: &Path, meta: &PostMetadata) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CmsError::io(parent, e))?;
    }
    let yaml = serde_yaml::to_string(meta).map_err(|source| CmsError::EncodeMetadata {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, yaml).map_err(|e| CmsError::io(path, e))
}

/// Read and split the body that belongs to the metadata file at `meta_path`
pub fn read_body(meta_path: &Path) -> Result<PostBody> {
    let path = body_path(meta_path);
    let text = fs::read_to_string(&path).map_err(|e| CmsError::io(&path, e))?;
    PostBody::parse(&text).ok_or(CmsError::MissingTitle(path))
}

/// Body path sharing the metadata file's directory and stem
pub fn body_path(meta_path: &Path) -> PathBuf {
    meta_path.with_extension(BODY_EXT)
}

/// Post identifier: the metadata file stem
pub fn post_id(meta_path: &Path) -> String {
    meta_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_metadata_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == METADATA_EXT)
        .unwrap_or(false)
}
