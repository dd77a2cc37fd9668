//! Command implementations behind the CLI

pub mod generate;
pub mod init;
pub mod list;
pub mod new;
