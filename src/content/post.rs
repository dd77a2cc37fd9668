//! Post model: one metadata record plus one body, sharing a path stem

use std::path::{Path, PathBuf};

use super::store;
use super::{PostBody, PostMetadata};
use crate::error::Result;

/// A post read from the posts folder
#[derive(Debug, Clone)]
pub struct Post {
    /// Source file stem, the generated identifier
    pub id: String,

    /// Full path of the metadata file
    pub source: PathBuf,

    pub meta: PostMetadata,

    pub body: PostBody,
}

impl Post {
    /// Read the metadata file at `meta_path` and its sibling body
    pub fn load(meta_path: &Path) -> Result<Self> {
        let meta = store::read_metadata(meta_path)?;
        let body = store::read_body(meta_path)?;

        Ok(Self {
            id: store::post_id(meta_path),
            source: meta_path.to_path_buf(),
            meta,
            body,
        })
    }

    /// URL path relative to the site root, e.g. `posts/2024/hello.html`
    pub fn url_path(&self) -> String {
        self.meta.url_path(&self.id)
    }

    /// Where the rendered page lands under the output folder
    pub fn output_path(&self, site_dir: &Path) -> PathBuf {
        site_dir
            .join("posts")
            .join(self.meta.year().to_string())
            .join(format!("{}.html", self.meta.output_stem(&self.id)))
    }
}
