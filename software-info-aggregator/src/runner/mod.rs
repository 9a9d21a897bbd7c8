//! Orchestrates a full aggregation run.
//!
//! Repositories are processed strictly sequentially; the only shared state
//! across them is the accumulating record list owned here. Any fetch
//! failure aborts the run before anything is written, so a mid-run failure
//! leaves prior outputs untouched.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::contents::fetch_contents;
use crate::discovery::{list_repositories, Repository};
use crate::extract::{basic_info, citation_info, package_info};
use crate::fetch::Fetcher;
use crate::report::{publish, ReportRenderer};
use crate::summary::RunSummary;
use crate::table::{RepoRecord, SummaryTable};
use tracing::{info, info_span, Instrument};

/// Drives the fetch, scan, extract, merge and publish pipeline.
pub struct Runner {
    config: RunnerConfig,
    fetcher: Fetcher,
    renderer: ReportRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// The HTTP session created here is shared across the whole run and
    /// released when the runner is dropped, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the HTTP client cannot be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let fetcher = Fetcher::new(config.token().map(str::to_string))?;
        Ok(Self {
            config,
            fetcher,
            renderer: ReportRenderer::new(),
        })
    }

    /// Executes the full aggregation flow.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on any fetch, decode or publish failure.
    /// There is no per-repository isolation: one failing repository fails
    /// the whole run.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let settings = self.config.settings();

        info!(organization = %settings.organization, "Starting aggregation run");
        let repositories = list_repositories(&self.fetcher, settings).await?;

        let mut summary = RunSummary::default();
        let mut records = Vec::with_capacity(repositories.len());

        for repository in &repositories {
            let record = self.aggregate_repository(repository).await?;
            summary.record(&record);
            records.push(record);
        }

        let table = SummaryTable::assemble(records);
        publish(
            &self.renderer,
            &table,
            &settings.output_root,
            &self.config.date_string(),
        )?;

        info!(
            repositories = summary.repositories,
            packages = summary.packages_found,
            citations = summary.citations_found,
            "Aggregation run complete"
        );
        Ok(summary)
    }

    /// Merges one repository's extractor outputs into a record.
    ///
    /// Merge order is basic, then package, then citation; the field sets
    /// are disjoint by construction, so later extractors only ever add.
    async fn aggregate_repository(
        &self,
        repository: &Repository,
    ) -> Result<RepoRecord, RunnerError> {
        let span = info_span!("aggregate", repository = %repository.name);

        async {
            let entries = fetch_contents(&self.fetcher, repository).await?;

            let basic = basic_info(repository);
            let package = package_info(&self.fetcher, self.config.settings(), &entries).await?;
            let zenodo = citation_info(&self.fetcher, &entries).await?;

            Ok(RepoRecord {
                basic,
                package,
                zenodo,
            })
        }
        .instrument(span)
        .await
    }
}
