//! Template sets rendered with the Tera engine
//!
//! A template set is a folder holding `index.jinja` and `post.jinja`
//! (plus any partials they include). Besides the page data, every template
//! can call `blogurl(path=...)` and `urljoin(base=..., url=...)`.

mod context;

pub use context::build_context;

use chrono::format::{Item, StrftimeItems};
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera, Value};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::helpers::urljoin;

/// Template file extension
pub const TEMPLATE_EXT: &str = "jinja";

/// Bundled "light" template set, written out by `init`
pub const LIGHT_TEMPLATES: [(&str, &str); 2] = [
    ("index.jinja", include_str!("light/index.jinja")),
    ("post.jinja", include_str!("light/post.jinja")),
];

/// Renders pages from one template set
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Load every `*.jinja` file under `template_dir`
    pub fn load(template_dir: &Path, config: &SiteConfig) -> Result<Self> {
        let pattern = template_dir
            .join("**")
            .join(format!("*.{}", TEMPLATE_EXT));
        let mut tera = Tera::new(&pattern.to_string_lossy())?;

        // Post bodies are already HTML
        tera.autoescape_on(vec![]);

        register_helpers(&mut tera, config);
        tracing::debug!(
            "Loaded templates from {:?}: {:?}",
            template_dir,
            tera.get_template_names().collect::<Vec<_>>()
        );

        Ok(Self { tera })
    }

    /// Render the template called `name` (without extension)
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        let template = format!("{}.{}", name, TEMPLATE_EXT);
        Ok(self.tera.render(&template, context)?)
    }
}

/// Register URL functions and filters on the engine
fn register_helpers(tera: &mut Tera, config: &SiteConfig) {
    let home = config.home.clone();
    tera.register_function(
        "blogurl",
        move |args: &HashMap<String, Value>| -> tera::Result<Value> {
            let path = string_arg("blogurl", "path", args)?;
            Ok(Value::String(urljoin(&home, &path)))
        },
    );
    tera.register_function(
        "urljoin",
        |args: &HashMap<String, Value>| -> tera::Result<Value> {
            let base = string_arg("urljoin", "base", args)?;
            let url = string_arg("urljoin", "url", args)?;
            Ok(Value::String(urljoin(&base, &url)))
        },
    );

    tera.register_filter("strip_html", strip_html_filter);
    tera.register_filter("date_format", date_format_filter);
}

fn string_arg(func: &str, name: &str, args: &HashMap<String, Value>) -> tera::Result<String> {
    match args.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(tera::Error::msg(format!(
            "`{}`: argument `{}` must be a string, got {}",
            func, name, other
        ))),
        None => Err(tera::Error::msg(format!(
            "`{}`: missing argument `{}`",
            func, name
        ))),
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(Value::String(result))
}

/// Tera filter: reformat a `YYYY-MM-DD` date with a strftime pattern
fn date_format_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "%B %d, %Y".to_string(),
    };

    let items: Vec<Item> = StrftimeItems::new(&format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(tera::Error::msg(format!(
            "`date_format`: invalid format `{}`",
            format
        )));
    }

    match chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        Ok(date) => Ok(Value::String(
            date.format_with_items(items.into_iter()).to_string(),
        )),
        // Not a date, leave it as-is
        Err(_) => Ok(Value::String(s)),
    }
}
