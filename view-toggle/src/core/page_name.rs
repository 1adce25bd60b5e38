//! Derive the display name used in the machine-view title.

use std::path::Path;

/// Label substituted for the application root directory.
const ROOT_LABEL: &str = "HOME";

/// Display name for a page file, taken from its parent directory.
///
/// The application root directory (e.g. `app/page.tsx`) maps to `Home`.
/// Hyphens become spaces and the result is title-cased.
pub fn display_name(page_path: &Path, root_dir_name: &str) -> String {
    let dir_name = page_path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    display_name_from_dir(&dir_name, root_dir_name)
}

pub fn display_name_from_dir(dir_name: &str, root_dir_name: &str) -> String {
    let base = if dir_name == root_dir_name {
        ROOT_LABEL
    } else {
        dir_name
    };
    title_case(&base.replace('-', " "))
}

/// Uppercase the first cased character of every cased run, lowercase the rest.
///
/// Any uncased character (space, digit, punctuation) starts a new run, so
/// `"2fa setup"` becomes `"2Fa Setup"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_cased = false;
    for ch in input.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && !prev_cased {
            out.extend(ch.to_uppercase());
        } else if cased {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev_cased = cased;
    }
    out
}
