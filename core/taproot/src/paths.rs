//! Path normalization for consistent root handling.
//!
//! Everything in this crate speaks one canonical form: forward-slash
//! separated, no trailing slash (bare roots keep theirs), symlinks resolved
//! when the path exists. Hosts on backslash platforms convert at the
//! presentation layer with [`to_native`].
//!
//! Handles platform-specific quirks:
//! - Windows drive roots (`C:/` keeps its trailing slash)
//! - `\\?\`-prefixed canonical paths on Windows
//! - Symlink resolution with graceful fallback for missing paths

use fs_err as fs;

/// Syntactic cleanup without filesystem access.
///
/// This function handles:
/// 1. Leading `~` expansion to the home directory (left as-is when the home
///    directory cannot be determined)
/// 2. Backslash to forward-slash conversion
/// 3. Collapse of repeated separators
/// 4. Trailing slash removal, except on bare roots (`/`, `C:/`)
///
/// # Examples
///
/// ```ignore
/// norm("/project/")     -> "/project"
/// norm("C:\\a\\b\\")    -> "C:/a/b"
/// norm("~/project")     -> "/home/user/project"
/// norm("/")             -> "/"
/// ```
pub fn norm(path: &str) -> String {
    // canonicalize on Windows yields \\?\-prefixed verbatim paths
    let path = path.strip_prefix(r"\\?\").unwrap_or(path);
    let expanded = expand_home(path);
    let mut cleaned = expanded.replace('\\', "/");
    while cleaned.contains("//") {
        cleaned = cleaned.replace("//", "/");
    }
    strip_trailing_slash(&cleaned)
}

/// Full normalization: [`norm`] plus canonicalization when the path exists.
///
/// Canonicalization resolves symlinks and produces the canonical OS form;
/// when it fails (missing path, permission error) the syntactically cleaned
/// input is used instead, never an error. Empty input yields `None`.
///
/// Idempotent: normalizing an already normalized path is a no-op.
pub fn normalize(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    let cleaned = norm(path);
    match fs::canonicalize(&cleaned) {
        Ok(canonical) => Some(norm(&canonical.to_string_lossy())),
        Err(_) => Some(cleaned),
    }
}

/// Parent of a normalized path, `None` at a filesystem root.
pub fn parent(path: &str) -> Option<String> {
    if path == "/" || is_drive_root(path) {
        return None;
    }
    let (dir, _) = path.rsplit_once('/')?;
    if dir.is_empty() {
        return Some("/".to_string());
    }
    if is_drive(dir) {
        return Some(format!("{dir}/"));
    }
    Some(dir.to_string())
}

/// Checks whether `child` equals `ancestor` or sits underneath it.
///
/// Textual containment over normalized paths with a component-boundary
/// guard: `/foo` does not contain `/foobar`.
pub fn is_ancestor_or_self(ancestor: &str, child: &str) -> bool {
    if ancestor == child {
        return true;
    }
    if ancestor == "/" {
        return child.starts_with('/');
    }
    if is_drive_root(ancestor) {
        return child.starts_with(ancestor);
    }
    child
        .strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Converts the canonical forward-slash form to the platform convention.
///
/// Presentation-only: cached and returned roots stay forward-slash, hosts
/// call this at the display boundary.
pub fn to_native(path: &str) -> String {
    #[cfg(windows)]
    {
        path.replace('/', "\\")
    }
    #[cfg(not(windows))]
    {
        path.to_string()
    }
}

fn expand_home(path: &str) -> String {
    let Some(rest) = path.strip_prefix('~') else {
        return path.to_string();
    };
    match dirs::home_dir() {
        Some(home) => {
            let home = home.to_string_lossy();
            format!("{}{}", home.trim_end_matches(['/', '\\']), rest)
        }
        None => path.to_string(),
    }
}

/// Strips trailing slashes, preserving root "/" and drive roots.
fn strip_trailing_slash(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if is_drive(trimmed) {
        return format!("{trimmed}/");
    }
    trimmed.to_string()
}

/// A bare drive designator like `C:`.
fn is_drive(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// A drive root like `C:/`.
fn is_drive_root(path: &str) -> bool {
    path.len() == 3 && path.ends_with('/') && is_drive(&path[..2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        assert_eq!(norm("/project/"), "/project");
        assert_eq!(norm("/project//"), "/project");
    }

    #[test]
    fn preserves_bare_roots() {
        assert_eq!(norm("/"), "/");
        assert_eq!(norm("//"), "/");
        assert_eq!(norm("C:\\"), "C:/");
    }

    #[test]
    fn converts_backslashes() {
        assert_eq!(norm("C:\\a\\b\\"), "C:/a/b");
        assert_eq!(norm("a\\b/c"), "a/b/c");
    }

    #[test]
    fn collapses_repeated_separators() {
        assert_eq!(norm("/a//b///c"), "/a/b/c");
    }

    #[test]
    fn expands_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let home = norm(&home.to_string_lossy());
        assert_eq!(norm("~/project/"), format!("{home}/project"));
        assert_eq!(norm("~"), home);
    }

    #[test]
    fn normalize_rejects_empty() {
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn normalize_falls_back_for_missing_paths() {
        assert_eq!(
            normalize("/no/such/path/48151623"),
            Some("/no/such/path/48151623".to_string())
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let existing = temp.path().to_string_lossy().to_string();
        for input in [existing.as_str(), "/no/such/path/48151623", "~/project/"] {
            let once = normalize(input).unwrap();
            assert_eq!(normalize(&once), Some(once.clone()));
        }
    }

    #[cfg(unix)]
    #[test]
    fn normalize_resolves_symlinks() {
        let temp = tempfile::tempdir().unwrap();
        let real_dir = temp.path().join("real");
        let link_path = temp.path().join("link");

        std::fs::create_dir(&real_dir).unwrap();
        std::os::unix::fs::symlink(&real_dir, &link_path).unwrap();

        assert_eq!(
            normalize(&real_dir.to_string_lossy()),
            normalize(&link_path.to_string_lossy())
        );
    }

    #[test]
    fn parent_stops_at_roots() {
        assert_eq!(parent("/a/b"), Some("/a".to_string()));
        assert_eq!(parent("/a"), Some("/".to_string()));
        assert_eq!(parent("/"), None);
        assert_eq!(parent("C:/x"), Some("C:/".to_string()));
        assert_eq!(parent("C:/"), None);
    }

    #[test]
    fn ancestor_requires_component_boundary() {
        assert!(is_ancestor_or_self("/foo", "/foo"));
        assert!(is_ancestor_or_self("/foo", "/foo/bar"));
        assert!(!is_ancestor_or_self("/foo", "/foobar"));
        assert!(!is_ancestor_or_self("/foo/bar", "/foo"));
        assert!(is_ancestor_or_self("/", "/anything"));
        assert!(is_ancestor_or_self("C:/", "C:/x"));
    }

    #[test]
    fn to_native_matches_platform_convention() {
        #[cfg(windows)]
        assert_eq!(to_native("C:/a/b"), "C:\\a\\b");
        #[cfg(not(windows))]
        assert_eq!(to_native("/a/b"), "/a/b");
    }
}
