use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ArchiveExtractor;

/// Extractor double that only records what it was asked to do.
#[derive(Default)]
pub struct FakeExtractor {
    pub calls: Mutex<Vec<(PathBuf, PathBuf, usize)>>,
}

impl FakeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ArchiveExtractor for FakeExtractor {
    fn extract(&self, archive: &Path, dest: &Path, strip_components: usize) -> Result<(), AppError> {
        self.calls.lock().unwrap().push((
            archive.to_path_buf(),
            dest.to_path_buf(),
            strip_components,
        ));
        Ok(())
    }
}
