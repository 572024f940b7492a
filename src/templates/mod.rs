use std::env;
use std::path::{Path, PathBuf};

pub const TEMPLATE_DIR_ENV: &str = "DEVINIT_TEMPLATE_DIR";

const TEMPLATE_DIR: &str = "template";

pub const SETTINGS_DIR: &str = ".vscode";
pub const SETTINGS_FILES: &[&str] = &["settings.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Lint,
    Format,
    EditorConfig,
    EditorSettings,
    Ignore,
}

impl ConfigKind {
    /// Destination names recognized as "already configured". The first one is
    /// what gets created.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Self::Lint => {
                &[".eslintrc", ".eslintrc.json", ".eslintrc.js", ".eslintrc.mjs", ".eslintrc.cjs"]
            }
            Self::Format => &[
                ".prettierrc",
                ".prettierrc.json",
                ".prettierrc.js",
                ".prettierrc.cjs",
                ".prettierrc.mjs",
            ],
            Self::EditorConfig => &[".editorconfig"],
            Self::EditorSettings => &[SETTINGS_DIR],
            Self::Ignore => &[".gitignore"],
        }
    }

    pub fn canonical(self) -> &'static str {
        self.candidates()[0]
    }

    pub fn template(self) -> &'static str {
        self.canonical()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lint => "eslint",
            Self::Format => "prettier",
            Self::EditorConfig => "editorconfig",
            Self::EditorSettings => ".vscode",
            Self::Ignore => ".gitignore",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: &'static str,
    pub version: &'static str,
}

const LINT_DEPENDENCIES: &[Dependency] = &[
    Dependency { name: "eslint", version: "^8.36.0" },
    Dependency { name: "@koalan/eslint-config", version: "latest" },
];

const FORMAT_DEPENDENCIES: &[Dependency] = &[Dependency { name: "prettier", version: "^2.8.4" }];

pub fn dev_dependencies(prettier: bool) -> Vec<Dependency> {
    let mut deps = LINT_DEPENDENCIES.to_vec();
    if prettier {
        deps.extend_from_slice(FORMAT_DEPENDENCIES);
    }
    deps
}

/// Finds the bundled template directory relative to the installed binary, never
/// the directory the tool was invoked from.
pub fn locate() -> PathBuf {
    if let Some(dir) = env::var_os(TEMPLATE_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    let source_tree = Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR);
    let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    else {
        return source_tree;
    };

    install_candidates(&exe_dir).into_iter().find(|p| p.is_dir()).unwrap_or(source_tree)
}

fn install_candidates(exe_dir: &Path) -> Vec<PathBuf> {
    vec![
        exe_dir.join(TEMPLATE_DIR),
        exe_dir.join("..").join("share").join(env!("CARGO_PKG_NAME")).join(TEMPLATE_DIR),
    ]
}
