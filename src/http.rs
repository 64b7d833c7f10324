//! HTTP collaborator for the search round-trip.
//!
//! The extraction core never does I/O of its own; this client is the
//! external collaborator that fetches the two page shapes. Status 200 and
//! 302 count as "success, extract the body" per the forum's wire contract;
//! anything else is a transport failure and extraction is never attempted.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::{FORM_CONTENT_TYPE, SEARCH_ENDPOINT_PATH};
use crate::error_handling::SearchError;
use crate::query::build_search_request_body;

/// Client for the forum's search endpoint.
pub struct SearchClient {
    client: Arc<reqwest::Client>,
    endpoint: Url,
}

impl SearchClient {
    /// Builds a client for the search endpoint under `base_url`.
    pub fn new(client: Arc<reqwest::Client>, base_url: &str) -> Result<Self, SearchError> {
        let endpoint = Url::parse(base_url)?.join(SEARCH_ENDPOINT_PATH)?;
        Ok(SearchClient { client, endpoint })
    }

    /// Fetches the search-form page (the page carrying the forum checklist
    /// and example queries).
    pub async fn fetch_search_form(&self) -> Result<String, SearchError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;
        Self::body_on_success(response).await
    }

    /// POSTs an encoded search query and returns the raw results page.
    ///
    /// `selected_forum_ids` is forwarded to the encoder in caller order; an
    /// empty slice searches all forums.
    pub async fn search(
        &self,
        query_text: &str,
        selected_forum_ids: &[String],
    ) -> Result<String, SearchError> {
        let body = build_search_request_body(query_text, selected_forum_ids);
        log::debug!("POST {} body={}", self.endpoint, body);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        Self::body_on_success(response).await
    }

    async fn body_on_success(response: reqwest::Response) -> Result<String, SearchError> {
        let status = response.status();
        // 302 is part of the success contract; the client is built with
        // redirects disabled so it is actually observable here.
        if status.as_u16() != 200 && status.as_u16() != 302 {
            return Err(SearchError::UnexpectedStatus(status));
        }
        Ok(response.text().await?)
    }
}
