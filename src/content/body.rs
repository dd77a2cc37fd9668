//! Post body (`<id>.md`): `# Title`, optional `## Subtitle`, then Markdown

use serde::Serialize;

const TITLE_MARKER: &str = "# ";
const SUBTITLE_MARKER: &str = "## ";

/// Parsed post text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostBody {
    pub title: String,
    /// Empty when the post has no `## ` line
    pub subtitle: String,
    /// Markdown source with title and subtitle removed, trimmed
    pub content: String,
}

impl PostBody {
    /// Split raw post text into title, subtitle and content.
    ///
    /// Returns `None` when the first line is not a non-empty `# ` title.
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines = lines_inclusive(text).peekable();

        let title = lines
            .next()?
            .strip_prefix(TITLE_MARKER)
            .map(str::trim)
            .filter(|t| !t.is_empty())?
            .to_string();

        let subtitle = lines
            .next_if(|line| line.starts_with(SUBTITLE_MARKER))
            .map(|line| line[SUBTITLE_MARKER.len()..].trim().to_string())
            .unwrap_or_default();

        let content = lines.collect::<String>().trim().to_string();

        Some(Self {
            title,
            subtitle,
            content,
        })
    }

    /// First `max_chars` characters of the content, with `...` appended only
    /// when something was cut. May end mid-word.
    pub fn preview_text(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let mut short: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            short.push_str("...");
        }
        short
    }
}

/// Lines with their terminators kept; `\r\n`, `\n` and a lone `\r` all end a line
fn lines_inclusive(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(['\r', '\n']) {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}
