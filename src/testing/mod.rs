mod fake_downloader;
mod fake_extractor;
mod tarball;

pub use fake_downloader::FakeDownloader;
pub use fake_extractor::FakeExtractor;
pub use recording_host::{HostEvent, RecordingHost};
pub use tarball::TarballBuilder;
