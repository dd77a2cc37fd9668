//! Generator module - renders the index page and one page per post
//!
//! A run validates the site layout, renders `index.html` from the most
//! recent previews, then renders every post. Already rendered post pages
//! are left alone unless the run is forced.

mod preview;

pub use preview::{build_previews, select_recent, PreviewEntry};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Context;

use crate::content::{store, MarkdownRenderer, Post};
use crate::error::{CmsError, Result};
use crate::templates::{build_context, TemplateRenderer};
use crate::Site;

/// Counts collected over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Post pages written
    pub rendered: usize,
    /// Post pages left untouched because they already existed
    pub skipped: usize,
    /// Posts that could not be read or rendered
    pub failed: usize,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.rendered + self.skipped + self.failed
    }
}

/// What happened to a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    Rendered(PathBuf),
    Skipped(PathBuf),
}

/// Post data handed to the `post` template
#[derive(Debug, Serialize)]
struct PostPage<'a> {
    title: &'a str,
    subtitle: &'a str,
    body: String,
}

/// Static site generator for one validated site layout
pub struct Generator<'a> {
    site: &'a Site,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl<'a> Generator<'a> {
    /// Validate the layout, create the output folder and load the template set
    pub fn new(site: &'a Site) -> Result<Self> {
        validate_layout(site)?;
        let renderer = TemplateRenderer::load(&site.template_dir, &site.config)?;

        Ok(Self {
            site,
            renderer,
            markdown: MarkdownRenderer::new(),
        })
    }

    /// Render the index page, then every post.
    ///
    /// A post that fails does not stop the others; the run still returns
    /// [`CmsError::PostsFailed`] at the end when any post failed.
    pub fn generate(&self, force: bool) -> Result<GenerateReport> {
        tracing::info!("Rendering main pages...");
        self.render_index()?;

        tracing::info!("Rendering posts...");
        let report = self.render_posts(force);

        if report.failed > 0 {
            return Err(CmsError::PostsFailed {
                failed: report.failed,
                total: report.total(),
            });
        }
        Ok(report)
    }

    /// Render `index.html`, always overwriting it
    pub fn render_index(&self) -> Result<PathBuf> {
        let config = &self.site.config;
        let previews = build_previews(
            &self.site.posts_dir,
            config.post_preview_count,
            config.post_preview_length,
            &self.markdown,
        );

        let mut extra = Context::new();
        extra.insert("meta", &previews);
        let context = build_context(config, extra);

        let html = self.renderer.render("index", &context)?;
        let output_path = self.site.output_dir.join("index.html");
        fs::write(&output_path, html).map_err(|e| CmsError::io(&output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(output_path)
    }

    /// Render every post found under the posts folder
    pub fn render_posts(&self, force: bool) -> GenerateReport {
        let mut report = GenerateReport::default();

        for meta_path in store::list_metadata_files(&self.site.posts_dir) {
            match self.render_post(&meta_path, force) {
                Ok(PostOutcome::Rendered(path)) => {
                    tracing::debug!("Generated post: {:?}", path);
                    report.rendered += 1;
                }
                Ok(PostOutcome::Skipped(path)) => {
                    tracing::debug!("Skipped existing: {:?}", path);
                    report.skipped += 1;
                }
                Err(e) => {
                    tracing::warn!("Failed to render post {:?}: {}", meta_path, e);
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Render one post unless its page exists and `force` is off
    pub fn render_post(&self, meta_path: &Path, force: bool) -> Result<PostOutcome> {
        let post = Post::load(meta_path)?;
        let output_path = post.output_path(&self.site.output_dir);

        if let Some(parent) = output_path.parent() {
            create_output_dir(parent).map_err(|e| CmsError::io(parent, e))?;
        }

        if output_path.exists() && !force {
            return Ok(PostOutcome::Skipped(output_path));
        }

        let mut extra = Context::new();
        extra.insert("meta", &post.meta);
        extra.insert(
            "post",
            &PostPage {
                title: &post.body.title,
                subtitle: &post.body.subtitle,
                body: self.markdown.render(&post.body.content),
            },
        );
        extra.insert("id", &post.id);
        extra.insert("url", &post.url_path());
        let context = build_context(&self.site.config, extra);

        let html = self.renderer.render("post", &context)?;
        fs::write(&output_path, html).map_err(|e| CmsError::io(&output_path, e))?;

        Ok(PostOutcome::Rendered(output_path))
    }
}

/// Check the templates and posts folders, create the output folder
pub fn validate_layout(site: &Site) -> Result<()> {
    for (path, what) in [
        (&site.template_dir, "templates path does not exist or is not a folder"),
        (&site.posts_dir, "posts path does not exist or is not a folder"),
    ] {
        if !path.is_dir() {
            return Err(CmsError::InvalidLayout {
                path: path.clone(),
                reason: what,
            });
        }
    }

    let output = &site.output_dir;
    if output.exists() {
        if !output.is_dir() {
            return Err(CmsError::InvalidLayout {
                path: output.clone(),
                reason: "output path is not a folder",
            });
        }
    } else {
        fs::create_dir_all(output).map_err(|e| CmsError::io(output, e))?;
    }

    Ok(())
}

/// `mkdir -p` with rwxr-xr-x permissions
fn create_output_dir(path: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path)
}
