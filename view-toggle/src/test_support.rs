//! Test-only page fixtures and a throwaway site layout.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Minimal page: one import, `return ( <main> ... </main> )`.
pub const SIMPLE_PAGE: &str = r#"import { Metadata } from "next"

export default function PricingPage() {
  return (
    <main className="min-h-screen">
      <h1>Pricing</h1>
    </main>
  )
}
"#;

/// Page whose `<main>` already sits inside a top-level fragment.
pub const PAGE_WITH_FRAGMENT: &str = r#"import Link from "next/link"

export default function FaqPage() {
  return (
    <>
      <main>
        <h1>FAQ</h1>
      </main>
    </>
  )
}
"#;

/// Page whose `</main>` is not directly followed by `)`.
pub const PAGE_WITHOUT_CLOSER: &str = r#"import { Metadata } from "next"

export default function ServicesPage() {
  return (
    <main>
      <h1>Services</h1>
    </main>
    <Footer />
  )
}
"#;

/// Temporary `marketing/app/<slug>/page.tsx` tree.
pub struct TempSite {
    dir: TempDir,
}

impl TempSite {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the page for `slug`; an empty slug is the app root page.
    pub fn page_path(&self, slug: &str) -> PathBuf {
        let app = self.dir.path().join("marketing").join("app");
        if slug.is_empty() {
            app.join("page.tsx")
        } else {
            app.join(slug).join("page.tsx")
        }
    }

    pub fn write_page(&self, slug: &str, contents: &str) -> PathBuf {
        let path = self.page_path(slug);
        let parent = path.parent().expect("page parent");
        fs::create_dir_all(parent).expect("create page dir");
        fs::write(&path, contents).expect("write page");
        path
    }

    pub fn read_page(&self, slug: &str) -> String {
        fs::read_to_string(self.page_path(slug)).expect("read page")
    }
}

impl Default for TempSite {
    fn default() -> Self {
        Self::new()
    }
}
