//! Reading and writing page source files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a page, returning `None` when the file does not exist.
pub fn read_page(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(Some(contents))
}

/// Overwrite a page with new contents in full.
pub fn write_page(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_reads_as_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        let page = read_page(&temp.path().join("page.tsx")).expect("read");
        assert!(page.is_none());
    }

    #[test]
    fn write_then_read() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("page.tsx");
        write_page(&path, "export {}\n").expect("write");
        assert_eq!(read_page(&path).expect("read").as_deref(), Some("export {}\n"));
    }

    #[test]
    fn directory_is_a_read_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = read_page(temp.path()).expect_err("directory");
        assert!(format!("{err:#}").starts_with("read "));
    }
}
