use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::config::Config;
use crate::probe;
use crate::templates::{self, Dependency};

pub const MANIFEST: &str = "package.json";

const DEV_DEPENDENCIES: &str = "devDependencies";

/// Whitespace conventions of the manifest as found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatting {
    pub indent: Option<String>,
    pub newline: Option<&'static str>,
}

impl Formatting {
    pub fn detect(text: &str) -> Self {
        Self { indent: detect_indent(text), newline: detect_newline(text) }
    }
}

/// Adds the fixed dev dependencies that `package.json` lacks and rewrites it in
/// its own indentation and newline style. Returns what was added.
pub fn merge(cfg: &Config) -> Result<Vec<Dependency>> {
    let path = cfg.root.join(MANIFEST);
    if !probe::file_exists(&path) {
        bail!("No {MANIFEST} found...");
    }

    let text =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let (out, added) = merge_text(&text, &templates::dev_dependencies(cfg.prettier))
        .with_context(|| format!("failed to update {}", path.display()))?;

    fs::write(&path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(added)
}

pub fn merge_text(text: &str, deps: &[Dependency]) -> Result<(String, Vec<Dependency>)> {
    let fmt = Formatting::detect(text);

    let mut doc: Value = serde_json::from_str(text)?;
    let Some(obj) = doc.as_object_mut() else {
        bail!("{MANIFEST} is not a JSON object");
    };

    let dev = obj.entry(DEV_DEPENDENCIES).or_insert_with(|| Value::Object(Map::new()));
    if dev.is_null() {
        *dev = Value::Object(Map::new());
    }
    let Some(dev) = dev.as_object_mut() else {
        bail!("{DEV_DEPENDENCIES} is not a JSON object");
    };

    let mut added = Vec::new();
    for dep in deps {
        if !dev.contains_key(dep.name) {
            dev.insert(dep.name.to_string(), Value::String(dep.version.to_string()));
            added.push(dep.clone());
        }
    }

    Ok((render(&doc, &fmt)?, added))
}

pub fn render(doc: &Value, fmt: &Formatting) -> Result<String> {
    let mut out = match &fmt.indent {
        Some(indent) => {
            let mut buf = Vec::new();
            let mut ser =
                Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
            doc.serialize(&mut ser)?;
            String::from_utf8(buf)?
        }
        None => serde_json::to_string(doc)?,
    };

    if let Some(nl) = fmt.newline {
        // serde_json breaks lines with `\n`; string values never contain a raw one
        if nl != "\n" {
            out = out.replace('\n', nl);
        }
        out.push_str(nl);
    }
    Ok(out)
}

/// `\r\n` when it outnumbers bare `\n`, `\n` otherwise, `None` for single-line
/// text.
pub fn detect_newline(text: &str) -> Option<&'static str> {
    let total = text.matches('\n').count();
    if total == 0 {
        return None;
    }
    let crlf = text.matches("\r\n").count();
    if crlf > total - crlf { Some("\r\n") } else { Some("\n") }
}

/// The indentation unit used by `text`: the most frequent step between
/// consecutive lines, in whichever of tabs or spaces indents more lines.
pub fn detect_indent(text: &str) -> Option<String> {
    let mut tab_lines = 0usize;
    let mut space_lines = 0usize;
    let mut tab_steps: HashMap<usize, usize> = HashMap::new();
    let mut space_steps: HashMap<usize, usize> = HashMap::new();
    let mut prev_tabs = 0usize;
    let mut prev_spaces = 0usize;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let tabs = line.chars().take_while(|&c| c == '\t').count();
        let spaces = if tabs == 0 { line.chars().take_while(|&c| c == ' ').count() } else { 0 };

        if tabs > 0 {
            tab_lines += 1;
        } else if spaces > 0 {
            space_lines += 1;
        }

        if tabs > prev_tabs {
            *tab_steps.entry(tabs - prev_tabs).or_default() += 1;
        }
        if spaces > prev_spaces {
            *space_steps.entry(spaces - prev_spaces).or_default() += 1;
        }

        prev_tabs = tabs;
        prev_spaces = spaces;
    }

    if tab_lines == 0 && space_lines == 0 {
        return None;
    }

    if tab_lines > space_lines {
        most_common(&tab_steps).map(|n| "\t".repeat(n))
    } else {
        most_common(&space_steps).map(|n| " ".repeat(n))
    }
}

fn most_common(steps: &HashMap<usize, usize>) -> Option<usize> {
    steps
        .iter()
        .max_by(|(a_step, a_count), (b_step, b_count)| {
            a_count.cmp(b_count).then_with(|| b_step.cmp(a_step))
        })
        .map(|(&step, _)| step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_detection() {
        assert_eq!(detect_newline("{}"), None);
        assert_eq!(detect_newline("{\n}\n"), Some("\n"));
        assert_eq!(detect_newline("{\r\n}\r\n"), Some("\r\n"));
        assert_eq!(detect_newline("a\r\nb\nc\n"), Some("\n"));
        assert_eq!(detect_newline("a\r\nb\r\nc\n"), Some("\r\n"));
    }

    #[test]
    fn indent_none_when_flat() {
        assert_eq!(detect_indent("{\"name\":\"x\"}\n"), None);
        assert_eq!(detect_indent(""), None);
    }

    #[test]
    fn indent_two_spaces() {
        let text = "{\n  \"a\": {\n    \"b\": 1\n  },\n  \"c\": 2\n}\n";
        assert_eq!(detect_indent(text).as_deref(), Some("  "));
    }

    #[test]
    fn indent_four_spaces() {
        let text = "{\n    \"a\": 1,\n    \"b\": 2\n}\n";
        assert_eq!(detect_indent(text).as_deref(), Some("    "));
    }

    #[test]
    fn indent_tabs() {
        let text = "{\r\n\t\"a\": {\r\n\t\t\"b\": 1\r\n\t}\r\n}\r\n";
        assert_eq!(detect_indent(text).as_deref(), Some("\t"));
    }

    #[test]
    fn indent_tie_prefers_smaller_step() {
        let text = "a\n  b\nc\n    d\n";
        assert_eq!(detect_indent(text).as_deref(), Some("  "));
    }

    #[test]
    fn render_compact_without_indent() {
        let doc: Value = serde_json::from_str("{\"b\":1,\"a\":[]}").unwrap();
        let fmt = Formatting { indent: None, newline: Some("\n") };
        assert_eq!(render(&doc, &fmt).unwrap(), "{\"b\":1,\"a\":[]}\n");
    }

    #[test]
    fn render_crlf_throughout() {
        let doc: Value = serde_json::from_str("{\"a\":\"x\\ny\"}").unwrap();
        let fmt = Formatting { indent: Some("  ".into()), newline: Some("\r\n") };
        assert_eq!(render(&doc, &fmt).unwrap(), "{\r\n  \"a\": \"x\\ny\"\r\n}\r\n");
    }

    #[test]
    fn render_keeps_key_order_and_indent() {
        let doc: Value = serde_json::from_str("{\"z\":{\"y\":true},\"a\":{}}").unwrap();
        let fmt = Formatting { indent: Some("\t".into()), newline: None };
        assert_eq!(render(&doc, &fmt).unwrap(), "{\n\t\"z\": {\n\t\t\"y\": true\n\t},\n\t\"a\": {}\n}");
    }
}
