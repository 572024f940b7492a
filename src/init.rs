use anyhow::Result;

use crate::config::Config;
use crate::git::{self, GitAction};
use crate::manifest::{self, MANIFEST};
use crate::materialize::{self, Outcome};
use crate::templates::ConfigKind;

pub fn run(cfg: &Config) -> Result<()> {
    add_dev_dependencies(cfg)?;

    add_config(cfg, ConfigKind::Lint);
    if cfg.prettier {
        add_config(cfg, ConfigKind::Format);
    }
    add_config(cfg, ConfigKind::EditorConfig);
    add_config(cfg, ConfigKind::Ignore);
    add_config(cfg, ConfigKind::EditorSettings);

    match git::bootstrap(&cfg.root) {
        Ok(GitAction::Initialized) => println!("🚚 git init success ..."),
        Ok(GitAction::Staged) => println!("🚚 git add success ..."),
        Err(e) => eprintln!("❌ git: {e:#}"),
    }

    println!("🥳 ... All Done!!!");
    Ok(())
}

fn add_dev_dependencies(cfg: &Config) -> Result<()> {
    let added = manifest::merge(cfg)?;

    if added.is_empty() {
        println!("🛠️ {MANIFEST} already has devDependencies ...");
    } else {
        let names: Vec<_> = added.iter().map(|d| format!("{}@{}", d.name, d.version)).collect();
        println!("📦 {MANIFEST} devDependencies added: {} ...", names.join(", "));
    }
    Ok(())
}

fn add_config(cfg: &Config, kind: ConfigKind) {
    match materialize::config_file(cfg, kind) {
        Ok(Outcome::Created(name)) => println!("🚚 {} init success ...", describe(kind, name)),
        Ok(Outcome::Skipped(name)) => println!("🛠️ already have {} ...", describe(kind, name)),
        Err(e) => eprintln!("❌ {}: {e:#}", kind.label()),
    }
}

fn describe(kind: ConfigKind, name: &str) -> String {
    if name == kind.label() { name.to_string() } else { format!("{} ({name})", kind.label()) }
}
