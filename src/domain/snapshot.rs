//! `last_build.env` snapshot loading.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::domain::AppError;

/// Ordered `KEY=VALUE` pairs read from a build snapshot file.
///
/// Keys may repeat; consumers that fold the pairs into a map see the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    entries: Vec<(String, String)>,
}

impl EnvSnapshot {
    /// Read and parse the snapshot at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|err| {
            io::Error::new(
                err.kind(),
                format!("Failed to read build environment file {}: {}", path.display(), err),
            )
        })?;
        Self::from_reader(file)
    }

    /// Parse snapshot content from any reader.
    ///
    /// Comments and blank lines are ignored. Lines without a valid `KEY=`
    /// prefix are skipped. Values are taken literally: `$NAME` is never
    /// expanded, and one pair of matching surrounding quotes is removed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        let mut entries = Vec::new();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match parse_line(trimmed) {
                Some(pair) => entries.push(pair),
                None => {
                    tracing::warn!(line = %line, index, "skipping malformed snapshot line");
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Last value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let valid_key = !key.is_empty()
        && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if !valid_key {
        return None;
    }

    Some((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    match bytes {
        [first @ (b'"' | b'\''), .., last] if first == last => &value[1..value.len() - 1],
        _ => value,
    }
}

impl IntoIterator for EnvSnapshot {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
