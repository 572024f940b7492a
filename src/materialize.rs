use std::fs;

use anyhow::{Context, Result, bail};

use crate::config::Config;
use crate::probe;
use crate::templates::{ConfigKind, SETTINGS_DIR, SETTINGS_FILES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(&'static str),
    Skipped(&'static str),
}

/// Copies the kind's template to its canonical name unless any recognized name
/// is already present. Existing files are never touched.
pub fn config_file(cfg: &Config, kind: ConfigKind) -> Result<Outcome> {
    if kind == ConfigKind::EditorSettings {
        return settings_dir(cfg);
    }

    if let Some(existing) = probe::first_existing(&cfg.root, kind.candidates()) {
        return Ok(Outcome::Skipped(existing));
    }

    let src = cfg.template_dir.join(kind.template());
    let data = fs::read(&src).with_context(|| format!("failed to read template {}", src.display()))?;

    let dest = cfg.root.join(kind.canonical());
    fs::write(&dest, data).with_context(|| format!("failed to write {}", dest.display()))?;

    Ok(Outcome::Created(kind.canonical()))
}

/// Creates `.vscode/` from the template subdirectory. An existing directory is
/// left alone entirely.
pub fn settings_dir(cfg: &Config) -> Result<Outcome> {
    let dest = cfg.root.join(SETTINGS_DIR);
    if probe::dir_exists(&dest) {
        return Ok(Outcome::Skipped(SETTINGS_DIR));
    }

    let src = cfg.template_dir.join(SETTINGS_DIR);
    if !probe::dir_exists(&src) {
        bail!("template directory {} is missing", src.display());
    }

    fs::create_dir(&dest).with_context(|| format!("failed to create {}", dest.display()))?;

    for name in SETTINGS_FILES {
        let from = src.join(name);
        let to = dest.join(name);
        fs::copy(&from, &to)
            .with_context(|| format!("failed to copy {} to {}", from.display(), to.display()))?;
    }

    Ok(Outcome::Created(SETTINGS_DIR))
}
