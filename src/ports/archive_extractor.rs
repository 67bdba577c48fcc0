use std::path::Path;

use crate::domain::AppError;

/// Unpacks an archive into a directory.
pub trait ArchiveExtractor {
    /// Extract `archive` under `dest`, dropping the first `strip_components`
    /// path segments of every entry.
    fn extract(&self, archive: &Path, dest: &Path, strip_components: usize) -> Result<(), AppError>;
}
