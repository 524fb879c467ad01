mod apply;
mod error;
mod exif_reader;
mod metadata;
mod naming;
mod report;
mod scanner;

pub use apply::{
    rename_directory, rename_files, FileOutcome, RenameOptions, RenameSummary, Renamer,
};
pub use error::RenameError;
pub use exif_reader::ExifTimestampSource;
pub use metadata::{
    parse_capture_timestamp, resolve_timestamp, ResolvedTimestamp, TimestampOrigin,
    TimestampSource, CAPTURE_TIMESTAMP_FORMAT,
};
pub use naming::{
    extension_with_dot, format_canonical_name, resolve_unique_path, resolve_unique_path_with,
};
pub use report::{failure_line, renaming_line, LogReporter, RenameReporter};
pub use scanner::{
    collect_image_files, is_image, validate_root, ScanResult, ScanStats, UnreadableEntry,
    IMAGE_EXTENSIONS,
};
