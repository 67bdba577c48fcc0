//! `.tar.gz` extraction with leading-component stripping.

use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::{Archive, EntryType};

use crate::domain::AppError;
use crate::ports::ArchiveExtractor;

#[derive(Debug, Clone, Default)]
pub struct TarGzExtractor;

impl TarGzExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveExtractor for TarGzExtractor {
    fn extract(&self, archive: &Path, dest: &Path, strip_components: usize) -> Result<(), AppError> {
        let file = File::open(archive)
            .map_err(|e| AppError::archive(archive, format!("cannot open archive: {}", e)))?;
        fs::create_dir_all(dest)?;
        let root = dest.canonicalize()?;

        let mut tarball = Archive::new(GzDecoder::new(file));
        tarball.set_overwrite(true);

        let entries =
            tarball.entries().map_err(|e| AppError::archive(archive, e.to_string()))?;

        let mut unpacked = 0usize;
        for entry in entries {
            let mut entry = entry.map_err(|e| AppError::archive(archive, e.to_string()))?;
            let entry_path =
                entry.path().map_err(|e| AppError::archive(archive, e.to_string()))?.into_owned();

            let Some(relative) = strip_leading(&entry_path, strip_components) else {
                continue;
            };
            if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
                return Err(AppError::archive(
                    archive,
                    format!("entry escapes destination: {}", entry_path.display()),
                ));
            }
            match entry.header().entry_type() {
                EntryType::Link => {
                    return Err(AppError::archive(
                        archive,
                        format!("hard links are not supported: {}", entry_path.display()),
                    ));
                }
                EntryType::Symlink => {
                    let link = entry
                        .link_name()
                        .map_err(|e| AppError::archive(archive, e.to_string()))?
                        .unwrap_or_default();
                    if !is_contained_link(&link) {
                        return Err(AppError::archive(
                            archive,
                            format!(
                                "symlink {} points outside destination: {}",
                                entry_path.display(),
                                link.display()
                            ),
                        ));
                    }
                }
                _ => {}
            }

            let target = dest.join(&relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
                if !parent.canonicalize()?.starts_with(&root) {
                    return Err(AppError::archive(
                        archive,
                        format!("entry escapes destination: {}", entry_path.display()),
                    ));
                }
            }
            entry.unpack(&target).map_err(|e| {
                AppError::archive(archive, format!("cannot write {}: {}", target.display(), e))
            })?;
            unpacked += 1;
        }

        tracing::debug!(unpacked, dest = %dest.display(), "archive extracted");
        Ok(())
    }
}

/// Relative link targets without `..` resolve inside the link's own directory.
fn is_contained_link(link: &Path) -> bool {
    !link.as_os_str().is_empty()
        && link.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Drop the first `count` components; `None` when nothing remains.
fn strip_leading(path: &Path, count: usize) -> Option<PathBuf> {
    let mut components = path.components().filter(|c| !matches!(c, Component::CurDir));
    for _ in 0..count {
        components.next()?;
    }
    let rest: PathBuf = components.collect();
    if rest.as_os_str().is_empty() { None } else { Some(rest) }
}
