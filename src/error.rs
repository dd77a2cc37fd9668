//! Error types shared by the generator and the post scaffolder

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading posts, generating the site or creating posts
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Invalid site layout at {path:?}: {reason}")]
    InvalidLayout { path: PathBuf, reason: &'static str },

    #[error("Malformed config file {path:?}: {source}")]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Malformed post metadata {path:?}: {source}")]
    MalformedMetadata {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Cannot encode post metadata for {path:?}: {source}")]
    EncodeMetadata {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Post has no title (first line must start with '# '): {0:?}")]
    MissingTitle(PathBuf),

    #[error("Possible ID collision: {0}")]
    IdCollision(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} of {total} posts failed to render")]
    PostsFailed { failed: usize, total: usize },
}

impl CmsError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CmsError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CmsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_display_names_path() {
        let err = CmsError::io("posts/2024/a.yml", Error::new(ErrorKind::NotFound, "gone"));
        let display = err.to_string();
        assert!(display.contains("posts/2024/a.yml"));
        assert!(display.contains("gone"));

        let err = CmsError::MissingTitle(PathBuf::from("posts/2024/a.md"));
        assert!(err.to_string().contains("posts/2024/a.md"));

        let err = CmsError::IdCollision("abc".to_string());
        assert_eq!(err.to_string(), "Possible ID collision: abc");
    }

    #[test]
    fn test_encode_and_decode_errors_read_differently() {
        let yaml_err = || serde_yaml::from_str::<u8>("x").unwrap_err();
        let encode = CmsError::EncodeMetadata {
            path: PathBuf::from("posts/2024/a.yml"),
            source: yaml_err(),
        };
        let decode = CmsError::MalformedMetadata {
            path: PathBuf::from("posts/2024/a.yml"),
            source: yaml_err(),
        };
        assert!(encode.to_string().starts_with("Cannot encode post metadata"));
        assert!(decode.to_string().starts_with("Malformed post metadata"));
    }
}
