//! Post metadata (`<id>.yml`)

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Accepts either a single string or a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Accepts `2024-03-01` as well as a timestamp such as `2024-03-01 10:30:00`,
/// keeping only the calendar date
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date `{}`", raw)))
}

/// Empty slugs behave exactly like a missing slug
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Metadata record stored next to each post body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMetadata {
    /// Human-readable output name, overrides the post id in URLs
    #[serde(default, deserialize_with = "non_empty")]
    pub slug: Option<String>,

    #[serde(deserialize_with = "calendar_date")]
    pub date: NaiveDate,

    #[serde(default, deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,

    /// Any other keys, passed through to templates untouched
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl PostMetadata {
    pub fn new(date: NaiveDate, slug: Option<String>, tags: Vec<String>) -> Self {
        Self {
            slug: slug.filter(|s| !s.is_empty()),
            date,
            tags,
            extra: IndexMap::new(),
        }
    }

    /// Decode a metadata document
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Year used for both source and output partitioning
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.date.year()
    }

    /// File stem of the rendered page: the slug when set, else the post id
    pub fn output_stem<'a>(&'a self, id: &'a str) -> &'a str {
        self.slug.as_deref().unwrap_or(id)
    }

    /// Public URL path of the rendered page, always `/`-separated
    pub fn url_path(&self, id: &str) -> String {
        format!("posts/{}/{}.html", self.year(), self.output_stem(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_metadata() {
        let yaml = "slug: hello\ndate: 2024-05-17\ntags:\n- rust\n- web\nlayout: wide\n";
        let meta = PostMetadata::parse(yaml).unwrap();
        assert_eq!(meta.slug.as_deref(), Some("hello"));
        assert_eq!(meta.date, NaiveDate::from_ymd_opt(2024, 5, 17).unwrap());
        assert_eq!(meta.tags, vec!["rust", "web"]);
        assert_eq!(meta.extra.get("layout").and_then(|v| v.as_str()), Some("wide"));
        assert_eq!(meta.url_path("abc"), "posts/2024/hello.html");
    }

    #[test]
    fn test_empty_slug_falls_back_to_id() {
        let meta = PostMetadata::parse("slug: ''\ndate: 2023-01-02\ntags: ['']\n").unwrap();
        assert_eq!(meta.slug, None);
        assert_eq!(meta.output_stem("abc123"), "abc123");
        assert_eq!(meta.url_path("abc123"), "posts/2023/abc123.html");
        assert_eq!(meta.tags, vec![""]);
    }

    #[test]
    fn test_single_tag_and_timestamp_date() {
        let meta = PostMetadata::parse("date: 2022-12-31 23:59:00\ntags: solo\n").unwrap();
        assert_eq!(meta.year(), 2022);
        assert_eq!(meta.tags, vec!["solo"]);
    }

    #[test]
    fn test_missing_date_is_rejected() {
        assert!(PostMetadata::parse("slug: x\ntags: []\n").is_err());
        assert!(PostMetadata::parse("date: yesterday\n").is_err());
        assert!(PostMetadata::parse("- just\n- a list\n").is_err());
    }

    #[test]
    fn test_written_metadata_reads_back() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let meta = PostMetadata::new(date, Some("leap".into()), vec!["a".into(), " b".into()]);
        let yaml = serde_yaml::to_string(&meta).unwrap();
        assert_eq!(PostMetadata::parse(&yaml).unwrap(), meta);
    }
}
