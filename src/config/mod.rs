//! Configuration module

mod site;

pub use site::FoldersConfig;
pub use site::SiteConfig;
pub use site::DEFAULT_CONFIG_PATH;
