//! Helper functions exposed to templates

mod url;

pub use url::*;
