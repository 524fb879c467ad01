use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Directory '{}' not found.", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("'{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read modification time of '{}': {source}", path.display())]
    ModifiedTime {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} -> {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RenameError::DirectoryNotFound(_)
                | RenameError::NotADirectory(_)
                | RenameError::ReadDirectory { .. }
        )
    }
}
