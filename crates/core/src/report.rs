use crate::error::RenameError;
use crate::scanner::UnreadableEntry;

pub trait RenameReporter {
    fn renaming(&mut self, from_name: &str, to_name: &str);
    fn rename_failed(&mut self, file_name: &str, error: &RenameError);
    fn entry_unreadable(&mut self, entry: &UnreadableEntry);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl RenameReporter for LogReporter {
    fn renaming(&mut self, from_name: &str, to_name: &str) {
        log::info!("{}", renaming_line(from_name, to_name));
    }

    fn rename_failed(&mut self, file_name: &str, error: &RenameError) {
        log::error!("{}", failure_line(file_name, error));
    }

    fn entry_unreadable(&mut self, entry: &UnreadableEntry) {
        log::warn!("Skipping {}: {}", entry.path.display(), entry.reason);
    }
}

pub fn renaming_line(from_name: &str, to_name: &str) -> String {
    format!("Renaming \"{from_name}\" to \"{to_name}\"")
}

pub fn failure_line(file_name: &str, error: &RenameError) -> String {
    match error {
        RenameError::Rename { source, .. } => format!("Error renaming {file_name}: {source}"),
        other => format!("Error renaming {file_name}: {other}"),
    }
}
