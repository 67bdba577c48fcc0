mod archive_extractor;
mod downloader;
mod pipeline_host;

pub use archive_extractor::ArchiveExtractor;
pub use downloader::Downloader;
pub use pipeline_host::PipelineHost;
