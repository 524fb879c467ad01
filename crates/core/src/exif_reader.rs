use crate::metadata::TimestampSource;
use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExifTimestampSource;

impl TimestampSource for ExifTimestampSource {
    fn capture_timestamp(&self, path: &Path) -> Option<String> {
        match read_date_time_original(path) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("no EXIF timestamp: {err:#}");
                None
            }
        }
    }
}

fn read_date_time_original(path: &Path) -> Result<Option<String>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let mut buf = BufReader::new(file);
    let exif = Reader::new()
        .read_from_container(&mut buf)
        .with_context(|| format!("cannot parse EXIF in {}", path.display()))?;

    let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        return Ok(None);
    };

    let raw = match &field.value {
        Value::Ascii(values) => values
            .first()
            .map(|bytes| {
                String::from_utf8_lossy(bytes)
                    .trim_matches(|c: char| c == '\0' || c.is_whitespace())
                    .to_string()
            }),
        _ => None,
    };
    Ok(raw.filter(|v| !v.is_empty()))
}
