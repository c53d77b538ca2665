use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("create output directory {}: {}", dir.display(), source)]
    CreateDir { dir: PathBuf, source: io::Error },
    #[error("write {}: {}", path.display(), source)]
    WriteFile { path: PathBuf, source: io::Error },
}
