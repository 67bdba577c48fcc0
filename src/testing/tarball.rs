use std::fs::File;
use std::io;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use tar::{Builder, EntryType, Header};

enum Entry {
    Dir(String),
    File { path: String, data: Vec<u8>, mode: u32 },
    Symlink { path: String, target: String },
}

/// Builds small `.tar.gz` fixtures shaped like Habitat release tarballs.
#[derive(Default)]
pub struct TarballBuilder {
    entries: Vec<Entry>,
}

impl TarballBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.entries.push(Entry::Dir(path.to_string()));
        self
    }

    pub fn file(mut self, path: &str, data: &[u8]) -> Self {
        self.entries.push(Entry::File { path: path.to_string(), data: data.to_vec(), mode: 0o644 });
        self
    }

    pub fn executable(mut self, path: &str, data: &[u8]) -> Self {
        self.entries.push(Entry::File { path: path.to_string(), data: data.to_vec(), mode: 0o755 });
        self
    }

    pub fn symlink(mut self, path: &str, target: &str) -> Self {
        self.entries.push(Entry::Symlink { path: path.to_string(), target: target.to_string() });
        self
    }

    pub fn write(self, dest: &Path) {
        let file = File::create(dest).unwrap();
        let mut builder = Builder::new(GzEncoder::new(file, Compression::default()));

        for entry in self.entries {
            let mut header = Header::new_gnu();
            match entry {
                Entry::Dir(path) => {
                    header.set_entry_type(EntryType::Directory);
                    header.set_size(0);
                    header.set_mode(0o755);
                    header.set_cksum();
                    builder.append_data(&mut header, path, io::empty()).unwrap();
                }
                Entry::File { path, data, mode } => {
                    header.set_size(data.len() as u64);
                    header.set_mode(mode);
                    header.set_cksum();
                    builder.append_data(&mut header, path, data.as_slice()).unwrap();
                }
                Entry::Symlink { path, target } => {
                    header.set_entry_type(EntryType::Symlink);
                    header.set_size(0);
                    header.set_mode(0o777);
                    builder.append_link(&mut header, path, target).unwrap();
                }
            }
        }

        builder.into_inner().unwrap().finish().unwrap();
    }
}
