//! Organization repository listing.
//!
//! This module queries the organization endpoint for the full set of
//! repositories, following page-numbered requests until a short page marks
//! the end of the listing.

mod repository;

pub use repository::Repository;

use crate::config::Settings;
use crate::fetch::{join_url, FetchError, Fetcher};
use tracing::{debug, info};

/// Lists every repository of the configured organization.
///
/// Pages are merged into one logical listing in upstream order; no
/// reordering happens here. The loop stops at the first page containing
/// fewer than `page_size` entries.
///
/// # Errors
///
/// Returns [`FetchError`] if any page request fails.
pub async fn list_repositories(
    fetcher: &Fetcher,
    settings: &Settings,
) -> Result<Vec<Repository>, FetchError> {
    let base = join_url(&[
        &settings.github_api_url,
        "orgs",
        &settings.organization,
        "repos",
    ]);

    let mut repositories = Vec::new();
    let mut page = 1usize;

    loop {
        let url = format!("{base}?per_page={}&page={page}", settings.page_size);
        debug!(page, "Fetching repository listing page");

        let batch: Vec<Repository> = fetcher.fetch_json(&url).await?;
        let fetched = batch.len();
        repositories.extend(batch);

        if fetched < settings.page_size {
            break;
        }
        page += 1;
    }

    info!(
        organization = %settings.organization,
        count = repositories.len(),
        "Listed repositories"
    );
    Ok(repositories)
}
