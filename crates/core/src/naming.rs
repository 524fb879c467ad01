use crate::metadata::ResolvedTimestamp;
use std::path::{Path, PathBuf};

const CANONICAL_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

pub fn format_canonical_name(timestamp: &ResolvedTimestamp) -> String {
    timestamp.value.format(CANONICAL_FORMAT).to_string()
}

pub fn extension_with_dot(path: &Path) -> String {
    path.extension()
        .map(|v| format!(".{}", v.to_string_lossy()))
        .unwrap_or_default()
}

pub fn resolve_unique_path(
    directory: &Path,
    base: &str,
    extension_with_dot: &str,
    original_path: &Path,
) -> PathBuf {
    resolve_unique_path_with(directory, base, extension_with_dot, original_path, |candidate| {
        candidate.exists()
    })
}

pub fn resolve_unique_path_with<F>(
    directory: &Path,
    base: &str,
    extension_with_dot: &str,
    original_path: &Path,
    is_occupied: F,
) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let is_available = |candidate: &Path| candidate == original_path || !is_occupied(candidate);

    let candidate = directory.join(format!("{}{}", base, extension_with_dot));
    if is_available(candidate.as_path()) {
        return candidate;
    }

    let mut n = 1usize;
    loop {
        let candidate = directory.join(format!("{}_{}{}", base, n, extension_with_dot));
        if is_available(candidate.as_path()) {
            return candidate;
        }
        n += 1;
    }
}
