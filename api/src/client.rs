//! Defines the `ActivityApi` seam and its HTTP implementation.

use crate::activity::ActivityCatalog;
use crate::config::ApiConfig;
use crate::reply;
use crate::reply::MessageReply;
use crate::ApiError;
use dioxus_logger::tracing::debug;
use reqwest::Url;

/// A roster-changing call. The variant name is the last path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Mutation {
    Signup,
    Unregister,
}

/// Anything that can serve the activities API.
///
/// The browser uses [`HttpActivityApi`]; tests supply an in-memory server.
pub trait ActivityApi {
    /// `GET /activities`
    async fn activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<MessageReply, ApiError>;

    /// `POST /activities/{activity}/unregister?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageReply, ApiError>;
}

/// Talks to the activities API over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpActivityApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// `{base}/activities`
    pub fn catalog_url(&self) -> Result<Url, ApiError> {
        self.url_with_segments(&["activities"])
    }

    /// `{base}/activities/{activity}/{mutation}?email={email}`
    ///
    /// The activity name is percent-encoded as one path segment, so names
    /// containing `/`, `?` or `#` still address a single activity.
    pub fn mutation_url(
        &self,
        activity: &str,
        mutation: Mutation,
        email: &str,
    ) -> Result<Url, ApiError> {
        let mut url = self.url_with_segments(&["activities", activity, mutation.into()])?;
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    fn url_with_segments(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(format!("{} cannot be a base url", self.config.base_url())))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn post(&self, url: Url) -> Result<MessageReply, ApiError> {
        debug!("POST {}", url);
        let response = self.client.post(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        reply::decode_mutation(status, &body)
    }
}

impl ActivityApi for HttpActivityApi {
    async fn activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = self.catalog_url()?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        reply::decode_catalog(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MessageReply, ApiError> {
        self.post(self.mutation_url(activity, Mutation::Signup, email)?)
            .await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageReply, ApiError> {
        self.post(self.mutation_url(activity, Mutation::Unregister, email)?)
            .await
    }
}
