//! Success-or-explicit-failure HTTP fetching.
//!
//! Every outbound call in the pipeline goes through [`Fetcher`], which wraps
//! one shared [`reqwest::Client`] for the duration of a run. A non-success
//! response is always surfaced as a [`FetchError`] carrying the response
//! body; malformed data is never returned silently. No retries, no caching.

mod error;

pub use error::FetchError;

use serde::de::DeserializeOwned;
use tracing::debug;

/// Shared HTTP session for one aggregation run.
///
/// Holds the optional bearer credential for the repository-hosting API.
/// The credential is attached only by [`Fetcher::fetch_json`]; the
/// package-statistics API is always queried anonymously.
pub struct Fetcher {
    client: reqwest::Client,
    token: Option<String>,
}

impl Fetcher {
    /// Creates a fetcher with an optional bearer credential.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the underlying client cannot
    /// be constructed.
    pub fn new(token: Option<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client, token })
    }

    /// Performs a GET with the bearer credential (if any) and decodes JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] on a non-success response,
    /// [`FetchError::Transport`] on connection failure, and
    /// [`FetchError::Decode`] if the body is not the expected JSON shape.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        self.get_json(url, self.token.as_deref()).await
    }

    /// Performs a GET without any credential and decodes JSON.
    pub async fn fetch_json_anonymous<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, FetchError> {
        self.get_json(url, None).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
    ) -> Result<T, FetchError> {
        debug!(url, authenticated = token.is_some(), "GET");

        let mut request = self.client.get(url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

/// Joins URL segments with `/`.
///
/// Segments are expected to be pre-encoded; this is plain concatenation,
/// not resolution.
pub fn join_url(parts: &[&str]) -> String {
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::Value;

    #[test]
    fn join_url_concatenates_segments() {
        assert_eq!(
            join_url(&["https://api.github.com", "orgs", "acme", "repos"]),
            "https://api.github.com/orgs/acme/repos"
        );
    }

    #[tokio::test]
    async fn fetch_json_decodes_success_response() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/thing")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"answer": 42}"#)
            .create_async()
            .await;

        let fetcher = Fetcher::new(None).unwrap();
        let value: Value = fetcher
            .fetch_json(&format!("{}/thing", server.url()))
            .await
            .unwrap();

        assert_eq!(value["answer"], 42);
    }

    #[tokio::test]
    async fn fetch_json_attaches_bearer_credential() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/private")
            .match_header("authorization", "Bearer sekrit")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let fetcher = Fetcher::new(Some("sekrit".to_string())).unwrap();
        let result: Result<Value, _> = fetcher
            .fetch_json(&format!("{}/private", server.url()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn anonymous_fetch_sends_no_credential() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/public")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let fetcher = Fetcher::new(Some("sekrit".to_string())).unwrap();
        let result: Result<Value, _> = fetcher
            .fetch_json_anonymous(&format!("{}/public", server.url()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_success_response_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("no such package")
            .create_async()
            .await;

        let fetcher = Fetcher::new(None).unwrap();
        let result: Result<Value, _> = fetcher
            .fetch_json(&format!("{}/missing", server.url()))
            .await;

        match result {
            Err(FetchError::Status { status, body, .. }) => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body, "no such package");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/garbage")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let fetcher = Fetcher::new(None).unwrap();
        let result: Result<Value, _> = fetcher
            .fetch_json(&format!("{}/garbage", server.url()))
            .await;

        assert!(matches!(result, Err(FetchError::Decode { .. })));
    }
}
