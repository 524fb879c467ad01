use crate::error::RenameError;
use crate::exif_reader::ExifTimestampSource;
use crate::metadata::{resolve_timestamp, TimestampOrigin, TimestampSource};
use crate::naming::{
    extension_with_dot, format_canonical_name, resolve_unique_path, resolve_unique_path_with,
};
use crate::report::{LogReporter, RenameReporter};
use crate::scanner::{collect_image_files, is_image, ScanStats};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    pub root: PathBuf,
    pub recursive: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    FilteredOut,
    Unchanged {
        path: PathBuf,
        origin: TimestampOrigin,
    },
    Renamed {
        from: PathBuf,
        to: PathBuf,
        origin: TimestampOrigin,
    },
    Simulated {
        from: PathBuf,
        to: PathBuf,
        origin: TimestampOrigin,
    },
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub scan: ScanStats,
    pub unreadable_entries: usize,
    pub renamed: usize,
    pub simulated: usize,
    pub unchanged: usize,
    pub failed: usize,
}

#[derive(Debug, Default)]
struct DryRunLedger {
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl DryRunLedger {
    fn is_occupied(&self, path: &Path) -> bool {
        self.claimed.contains(path) || (!self.vacated.contains(path) && path.exists())
    }

    fn record(&mut self, from: &Path, to: &Path) {
        self.claimed.remove(from);
        self.vacated.insert(from.to_path_buf());
        self.vacated.remove(to);
        self.claimed.insert(to.to_path_buf());
    }
}

pub struct Renamer<'a> {
    source: &'a dyn TimestampSource,
    reporter: &'a mut dyn RenameReporter,
    dry_run: bool,
    ledger: DryRunLedger,
    summary: RenameSummary,
}

impl<'a> Renamer<'a> {
    pub fn new(
        source: &'a dyn TimestampSource,
        reporter: &'a mut dyn RenameReporter,
        dry_run: bool,
    ) -> Self {
        Self {
            source,
            reporter,
            dry_run,
            ledger: DryRunLedger::default(),
            summary: RenameSummary::default(),
        }
    }

    pub fn process_file(&mut self, path: &Path) -> FileOutcome {
        if !is_image(path) {
            return FileOutcome::FilteredOut;
        }

        let file_name = display_name(path);
        let timestamp = match resolve_timestamp(path, self.source) {
            Ok(timestamp) => timestamp,
            Err(err) => {
                self.reporter.rename_failed(&file_name, &err);
                self.summary.failed += 1;
                return FileOutcome::Failed;
            }
        };
        log::debug!("{}: {:?} timestamp {}", file_name, timestamp.origin, timestamp.value);

        let base = format_canonical_name(&timestamp);
        let extension = extension_with_dot(path);
        let directory = path.parent().unwrap_or_else(|| Path::new("."));
        let target = if self.dry_run {
            let ledger = &self.ledger;
            resolve_unique_path_with(directory, &base, &extension, path, |candidate| {
                ledger.is_occupied(candidate)
            })
        } else {
            resolve_unique_path(directory, &base, &extension, path)
        };

        if target == path {
            self.summary.unchanged += 1;
            return FileOutcome::Unchanged {
                path: path.to_path_buf(),
                origin: timestamp.origin,
            };
        }

        self.reporter.renaming(&file_name, &display_name(&target));

        if self.dry_run {
            self.ledger.record(path, &target);
            self.summary.simulated += 1;
            return FileOutcome::Simulated {
                from: path.to_path_buf(),
                to: target,
                origin: timestamp.origin,
            };
        }

        match fs::rename(path, &target) {
            Ok(()) => {
                self.summary.renamed += 1;
                FileOutcome::Renamed {
                    from: path.to_path_buf(),
                    to: target,
                    origin: timestamp.origin,
                }
            }
            Err(source) => {
                let err = RenameError::Rename {
                    from: path.to_path_buf(),
                    to: target,
                    source,
                };
                self.reporter.rename_failed(&file_name, &err);
                self.summary.failed += 1;
                FileOutcome::Failed
            }
        }
    }

    pub fn finish(self) -> RenameSummary {
        self.summary
    }
}

pub fn rename_files(
    options: &RenameOptions,
    source: &dyn TimestampSource,
    reporter: &mut dyn RenameReporter,
) -> Result<RenameSummary, RenameError> {
    let scan = collect_image_files(&options.root, options.recursive)?;
    for entry in &scan.unreadable {
        reporter.entry_unreadable(entry);
    }

    let mut renamer = Renamer::new(source, reporter, options.dry_run);
    for path in &scan.files {
        renamer.process_file(path);
    }

    let mut summary = renamer.finish();
    summary.scan = scan.stats;
    summary.unreadable_entries = scan.unreadable.len();
    Ok(summary)
}

pub fn rename_directory(options: &RenameOptions) -> Result<RenameSummary, RenameError> {
    let mut reporter = LogReporter;
    rename_files(options, &ExifTimestampSource, &mut reporter)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
