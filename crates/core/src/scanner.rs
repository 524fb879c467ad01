use crate::error::RenameError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "ico", "webp", "heic", "heif", "jfif",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub scanned_files: usize,
    pub image_files: usize,
    pub skipped_non_image: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableEntry {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub unreadable: Vec<UnreadableEntry>,
    pub stats: ScanStats,
}

pub fn validate_root(root: &Path) -> Result<(), RenameError> {
    if !root.exists() {
        return Err(RenameError::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(RenameError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

pub fn collect_image_files(root: &Path, recursive: bool) -> Result<ScanResult, RenameError> {
    validate_root(root)?;

    let mut result = ScanResult::default();
    if recursive {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(RenameError::ReadDirectory {
                        path: root.to_path_buf(),
                        source: io::Error::from(err),
                    });
                }
                Err(err) => {
                    result.unreadable.push(UnreadableEntry {
                        path: err.path().unwrap_or(root).to_path_buf(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            };
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            push_candidate(&mut result, path.to_path_buf());
        }
    } else {
        let entries = fs::read_dir(root).map_err(|source| RenameError::ReadDirectory {
            path: root.to_path_buf(),
            source,
        })?;
        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(err) => result.unreadable.push(UnreadableEntry {
                    path: root.to_path_buf(),
                    reason: err.to_string(),
                }),
            }
        }
        paths.sort();
        for path in paths {
            if path.is_dir() {
                continue;
            }
            push_candidate(&mut result, path);
        }
    }

    Ok(result)
}

fn push_candidate(result: &mut ScanResult, path: PathBuf) {
    result.stats.scanned_files += 1;
    if is_image(&path) {
        result.stats.image_files += 1;
        result.files.push(path);
    } else {
        result.stats.skipped_non_image += 1;
    }
}

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
