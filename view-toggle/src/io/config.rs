//! Page list configuration stored in `view-toggle.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "view-toggle.toml";

/// Marketing pages that receive the toggle when no list is configured.
const DEFAULT_PAGE_SLUGS: &[&str] = &[
    "visitor-identification",
    "audience-builder",
    "intent-audiences",
    "direct-mail",
    "data-access",
    "clean-room",
    "services",
    "pricing",
    "faq",
];

/// Toggle configuration (TOML).
///
/// Missing fields fall back to the marketing site defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToggleConfig {
    /// Directory name of the application root; pages directly inside it are
    /// titled "Home".
    pub root_dir_name: String,

    /// Page files to process, in order. Relative paths resolve against the
    /// working directory.
    pub pages: Vec<PathBuf>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            root_dir_name: "app".to_string(),
            pages: DEFAULT_PAGE_SLUGS
                .iter()
                .map(|slug| Path::new("marketing").join("app").join(slug).join("page.tsx"))
                .collect(),
        }
    }
}

impl ToggleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.root_dir_name.trim().is_empty() {
            return Err(anyhow!("root_dir_name must be non-empty"));
        }
        if self.pages.is_empty() {
            return Err(anyhow!("pages must be a non-empty array"));
        }
        if let Some(index) = self
            .pages
            .iter()
            .position(|page| page.as_os_str().is_empty())
        {
            return Err(anyhow!("pages[{index}] must be non-empty"));
        }
        Ok(())
    }

    /// Replace the page list when explicit paths were given.
    pub fn with_pages(mut self, pages: Vec<PathBuf>) -> Self {
        if !pages.is_empty() {
            self.pages = pages;
        }
        self
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ToggleConfig::default()`.
pub fn load_config(path: &Path) -> Result<ToggleConfig> {
    if !path.exists() {
        let cfg = ToggleConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ToggleConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ToggleConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write the default config unless one exists; `force` overwrites.
///
/// Returns whether the file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        return Ok(false);
    }
    write_config(path, &ToggleConfig::default())?;
    Ok(true)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ToggleConfig::default());
        assert_eq!(cfg.pages.len(), 9);
        assert_eq!(
            cfg.pages[0],
            PathBuf::from("marketing/app/visitor-identification/page.tsx")
        );
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        let cfg = ToggleConfig::default();
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_keeps_default_root() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "pages = [\"site/pricing/page.tsx\"]\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.root_dir_name, "app");
        assert_eq!(cfg.pages, vec![PathBuf::from("site/pricing/page.tsx")]);
    }

    #[test]
    fn rejects_empty_page_list() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "pages = []\n").expect("write");
        let err = load_config(&path).expect_err("empty pages");
        assert!(format!("{err:#}").contains("pages must be a non-empty array"));
    }

    #[test]
    fn init_keeps_existing_file_unless_forced() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "root_dir_name = \"site\"\n").expect("write");

        assert!(!init_config(&path, false).expect("init"));
        assert_eq!(load_config(&path).expect("load").root_dir_name, "site");

        assert!(init_config(&path, true).expect("init force"));
        assert_eq!(load_config(&path).expect("load"), ToggleConfig::default());
    }

    #[test]
    fn explicit_pages_override_list() {
        let cfg = ToggleConfig::default().with_pages(vec![PathBuf::from("a/page.tsx")]);
        assert_eq!(cfg.pages, vec![PathBuf::from("a/page.tsx")]);
        let cfg = ToggleConfig::default().with_pages(Vec::new());
        assert_eq!(cfg.pages.len(), 9);
    }
}
