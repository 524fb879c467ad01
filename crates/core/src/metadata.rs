use crate::error::RenameError;
use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use std::fs;
use std::path::Path;

pub const CAPTURE_TIMESTAMP_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampOrigin {
    Metadata,
    FileModified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTimestamp {
    pub origin: TimestampOrigin,
    pub value: NaiveDateTime,
}

/// Supplies the raw capture timestamp embedded in a file, if there is one.
pub trait TimestampSource {
    fn capture_timestamp(&self, path: &Path) -> Option<String>;
}

pub fn parse_capture_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.trim_end_matches('\0');
    if !normalized.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(normalized, CAPTURE_TIMESTAMP_FORMAT)
        .ok()
        .filter(|value| value.nanosecond() < 1_000_000_000)
}

pub fn resolve_timestamp(
    path: &Path,
    source: &dyn TimestampSource,
) -> Result<ResolvedTimestamp, RenameError> {
    if let Some(value) = source
        .capture_timestamp(path)
        .as_deref()
        .and_then(parse_capture_timestamp)
    {
        return Ok(ResolvedTimestamp {
            origin: TimestampOrigin::Metadata,
            value,
        });
    }

    Ok(ResolvedTimestamp {
        origin: TimestampOrigin::FileModified,
        value: file_modified_to_local(path)?.naive_local(),
    })
}

fn file_modified_to_local(path: &Path) -> Result<DateTime<Local>, RenameError> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| RenameError::ModifiedTime {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(DateTime::from(modified))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{
        parse_capture_timestamp, resolve_timestamp, TimestampOrigin, TimestampSource,
    };
    use crate::error::RenameError;
    use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
    use std::fs;
    use std::path::Path;
    use std::time::SystemTime;
    use tempfile::tempdir;

    pub(crate) struct FixedSource(pub Option<&'static str>);

    impl TimestampSource for FixedSource {
        fn capture_timestamp(&self, _path: &Path) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    pub(crate) fn local_time(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid date")
    }

    pub(crate) fn set_modified(path: &Path, when: NaiveDateTime) {
        let local = Local
            .from_local_datetime(&when)
            .earliest()
            .expect("representable local time");
        let file = fs::File::options()
            .write(true)
            .open(path)
            .expect("open for mtime");
        file.set_modified(SystemTime::from(local))
            .expect("set mtime");
    }

    #[test]
    fn parse_accepts_exif_layout_and_rejects_others() {
        assert_eq!(
            parse_capture_timestamp("2022:12:25 10:30:00"),
            Some(local_time(2022, 12, 25, 10, 30, 0))
        );
        assert_eq!(
            parse_capture_timestamp("2022:12:25 10:30:00\0"),
            Some(local_time(2022, 12, 25, 10, 30, 0))
        );
        assert_eq!(parse_capture_timestamp("2022-12-25 10:30:00"), None);
        assert_eq!(parse_capture_timestamp("    :  :     :  :  "), None);
        assert_eq!(parse_capture_timestamp(""), None);
        assert_eq!(parse_capture_timestamp("2022:12:25 10:30:60"), None);
        assert_eq!(parse_capture_timestamp("+2022:12:25 10:30:00"), None);
        assert_eq!(parse_capture_timestamp("-2022:12:25 10:30:00"), None);
    }

    #[test]
    fn metadata_wins_over_modification_time() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("IMG_0001.jpg");
        fs::write(&path, b"x").expect("write");
        set_modified(&path, local_time(2023, 1, 1, 12, 0, 0));

        let resolved = resolve_timestamp(&path, &FixedSource(Some("2022:12:25 10:30:00")))
            .expect("resolve");
        assert_eq!(resolved.origin, TimestampOrigin::Metadata);
        assert_eq!(resolved.value, local_time(2022, 12, 25, 10, 30, 0));
    }

    #[test]
    fn missing_or_malformed_metadata_falls_back_to_modification_time() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("IMG_0002.jpg");
        fs::write(&path, b"x").expect("write");
        set_modified(&path, local_time(2023, 1, 1, 12, 0, 0));

        for source in [FixedSource(None), FixedSource(Some("not a date"))] {
            let resolved = resolve_timestamp(&path, &source).expect("resolve");
            assert_eq!(resolved.origin, TimestampOrigin::FileModified);
            assert_eq!(resolved.value, local_time(2023, 1, 1, 12, 0, 0));
        }
    }

    #[test]
    fn vanished_file_is_a_modified_time_error() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("gone.jpg");

        let err = resolve_timestamp(&path, &FixedSource(None)).expect_err("should fail");
        assert!(matches!(err, RenameError::ModifiedTime { .. }));
    }
}
