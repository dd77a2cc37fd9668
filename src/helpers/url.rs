//! URL helper functions

/// Resolve `url` against `base` the way a browser resolves a link.
///
/// # Examples
/// ```ignore
/// urljoin("https://example.com/blog/", "posts/2024/a.html") // -> "https://example.com/blog/posts/2024/a.html"
/// urljoin("/blog/posts/a.html", "../index.html")            // -> "/blog/index.html"
/// ```
pub fn urljoin(base: &str, url: &str) -> String {
    if base.is_empty() {
        return url.to_string();
    }
    if url.is_empty() {
        return base.to_string();
    }
    if has_scheme(url) {
        return url.to_string();
    }

    let (origin, rest) = split_origin(base);

    // Scheme-relative: keep only the base scheme
    if let Some(authority) = url.strip_prefix("//") {
        return match origin.find("//") {
            Some(pos) => format!("{}//{}", &origin[..pos], authority),
            None => url.to_string(),
        };
    }

    let base_no_fragment = rest.split('#').next().unwrap_or("");
    if url.starts_with('#') {
        return format!("{}{}{}", origin, base_no_fragment, url);
    }

    let base_path = base_no_fragment.split('?').next().unwrap_or("");
    if url.starts_with('?') {
        return format!("{}{}{}", origin, base_path, url);
    }

    let tail_start = url.find(['?', '#']).unwrap_or(url.len());
    let (url_path, url_tail) = url.split_at(tail_start);

    let merged = if url_path.starts_with('/') {
        url_path.to_string()
    } else {
        let dir = match base_path.rfind('/') {
            Some(pos) => &base_path[..=pos],
            None if !origin.is_empty() => "/",
            None => "",
        };
        format!("{}{}", dir, url_path)
    };

    format!("{}{}{}", origin, remove_dot_segments(&merged), url_tail)
}

/// `scheme:` prefix check (RFC 3986 scheme characters, before any `/`)
fn has_scheme(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return false;
    };
    let scheme = &url[..colon];
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split `https://host:port/path?q` into (`https://host:port`, `/path?q`)
fn split_origin(base: &str) -> (&str, &str) {
    let authority_start = match base.find("://") {
        Some(pos) if has_scheme(base) => pos + 3,
        _ if base.starts_with("//") => 2,
        _ => return ("", base),
    };
    let end = base[authority_start..]
        .find(['/', '?', '#'])
        .map(|p| authority_start + p)
        .unwrap_or(base.len());
    base.split_at(end)
}

/// Collapse `.` and `..` path segments, never climbing above the root
fn remove_dot_segments(path: &str) -> String {
    let absolute = path.starts_with('/');
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let last = segments.len().saturating_sub(1);
    let mut out: Vec<&str> = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().enumerate() {
        match *segment {
            "." => {}
            ".." => {
                out.pop();
            }
            other => out.push(other),
        }
        if i == last && matches!(*segment, "." | "..") {
            out.push("");
        }
    }

    if absolute {
        format!("/{}", out.join("/"))
    } else {
        out.join("/")
    }
}
