mod azure_pipelines;
mod curl_downloader;
mod github_actions;
mod http_downloader;
mod tar_gz_extractor;

pub use azure_pipelines::AzurePipelinesHost;
pub use curl_downloader::CurlDownloader;
pub use github_actions::GitHubActionsHost;
pub use http_downloader::HttpDownloader;
pub use tar_gz_extractor::TarGzExtractor;
