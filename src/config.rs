use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::templates;

/// Everything a run needs, resolved once up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub template_dir: PathBuf,
    pub prettier: bool,
}

impl Config {
    pub fn from_env(prettier: bool) -> Result<Self> {
        let root = env::current_dir().context("failed to read the current directory")?;
        Ok(Self { root, template_dir: templates::locate(), prettier })
    }
}
