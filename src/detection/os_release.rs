//! Distribution detection from the OS release file.

use crate::Distro;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Identifiers checked in priority order; the first substring hit wins.
const IDENTIFIERS: &[(&str, Distro)] = &[
    ("debian", Distro::Debian),
    ("ubuntu", Distro::Debian),
    ("arch", Distro::Arch),
    ("fedora", Distro::Fedora),
];

/// Classify release-file content into a distribution family.
///
/// Matching is a case-insensitive substring search over the whole file, so
/// derivatives that mention their parent anywhere are picked up too. This is
/// a heuristic: with several hits, the earliest entry in the priority list
/// wins regardless of where it appears in the file.
///
/// # Example
///
/// ```rust
/// use auto_fastfetch::{classify_os_release, Distro};
///
/// assert_eq!(classify_os_release("ID=fedora\n"), Distro::Fedora);
/// assert_eq!(classify_os_release("NAME=\"Arch-based Ubuntu Remix\""), Distro::Debian);
/// assert_eq!(classify_os_release("ID=alpine\n"), Distro::Unknown);
/// ```
pub fn classify_os_release(content: &str) -> Distro {
    let content = content.to_lowercase();
    IDENTIFIERS
        .iter()
        .find(|(needle, _)| content.contains(needle))
        .map(|(_, distro)| *distro)
        .unwrap_or(Distro::Unknown)
}

fn pretty_name_regex() -> &'static Regex {
    static PRETTY_NAME_RE: OnceLock<Regex> = OnceLock::new();
    PRETTY_NAME_RE.get_or_init(|| {
        Regex::new(r#"(?m)^PRETTY_NAME=["']?([^"'\n]*)["']?\s*$"#)
            .expect("Invalid PRETTY_NAME regex")
    })
}

/// Extract `PRETTY_NAME` from release-file content, if present.
pub fn pretty_name(content: &str) -> Option<String> {
    pretty_name_regex()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Read `path` and classify it.
///
/// Any read failure (missing file, permissions, invalid UTF-8) yields
/// [`Distro::Unknown`]; this function never errors.
pub async fn detect_distro(path: &Path) -> Distro {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "release file unreadable");
            return Distro::Unknown;
        }
    };

    let distro = classify_os_release(&content);
    debug!(
        pretty_name = pretty_name(&content).as_deref().unwrap_or("-"),
        %distro,
        "detected distribution"
    );
    distro
}
