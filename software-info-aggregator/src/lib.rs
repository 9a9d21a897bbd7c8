#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod contents;
pub mod discovery;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod runner;
pub mod summary;
pub mod table;

pub use config::{load_settings, ConfigError, Settings};
pub use contents::{fetch_contents, find_file, ContentEntry, ContentError};
pub use discovery::{list_repositories, Repository};
pub use extract::{
    basic_info, citation_info, find_citation_badges, find_package_name, package_info, BasicInfo,
    NameMatch, PackageInfo,
};
pub use fetch::{join_url, FetchError, Fetcher};
pub use report::{create_handlebars_registry, publish, ReportError, ReportRenderer};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::RunSummary;
pub use table::{RepoRecord, SummaryTable, COLUMNS};
