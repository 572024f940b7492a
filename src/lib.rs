pub mod config;
pub mod git;
pub mod init;
pub mod manifest;
pub mod materialize;
pub mod probe;
pub mod templates;

pub use config::Config;
