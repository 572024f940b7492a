use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::probe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitAction {
    Initialized,
    Staged,
}

/// Makes `root` a git repository if it isn't one yet, then stages everything. A
/// `.git` file (worktree, submodule) counts as a repository.
pub fn bootstrap(root: &Path) -> Result<GitAction> {
    let action = if probe::exists(&root.join(".git")) {
        GitAction::Staged
    } else {
        git(root, &["init"])?;
        GitAction::Initialized
    };

    git(root, &["add", "."])?;
    Ok(action)
}

fn git(root: &Path, args: &[&str]) -> Result<()> {
    let cmd = format!("git {}", args.join(" "));
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .with_context(|| format!("failed to run {cmd}"))?;

    if !output.status.success() {
        bail!("{cmd} failed: {}", String::from_utf8_lossy(&output.stderr).trim());
    }

    Ok(())
}
