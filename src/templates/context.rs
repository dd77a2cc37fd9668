//! Template context construction

use tera::Context;

use crate::config::SiteConfig;

/// Base context shared by every page (`config`, `home`), merged with the
/// page-specific `extra` values. Keys in `extra` win over the base ones.
///
/// The `blogurl` and `urljoin` callables are engine functions registered
/// by [`super::TemplateRenderer`], so they are available on every page too.
pub fn build_context(config: &SiteConfig, extra: Context) -> Context {
    let mut context = Context::new();
    context.insert("config", config);
    context.insert("home", &config.home);
    context.extend(extra);
    context
}
