use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::CmsConfig;
use crate::error::{SyncError, SyncResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const POSTS_QUERY: &str = r#"*[_type == "post"] | order(publishedAt desc) { "id": _id, title, "slug": slug.current, description, category, readTime, publishedAt, "imageUrl": mainImage.asset->url, body }"#;
pub const TESTIMONIALS_QUERY: &str = r#"*[_type == "testimonial" && isActive == true] | order(_createdAt asc) { "id": _id, name, role, quote, "imageUrl": image.asset->url, initial, gradient, isActive }"#;
pub const PACKAGES_QUERY: &str = r#"*[_type == "package"] | order(_createdAt asc) { "id": _id, title, price, description, features, category, paymentButtonId }"#;

/// The three document collections the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Posts,
    Testimonials,
    Packages,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Posts => "posts",
            Collection::Testimonials => "testimonials",
            Collection::Packages => "packages",
        }
    }

    pub fn query(&self) -> &'static str {
        match self {
            Collection::Posts => POSTS_QUERY,
            Collection::Testimonials => TESTIMONIALS_QUERY,
            Collection::Packages => PACKAGES_QUERY,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: Vec<T>,
}

/// Read-only client for the CMS query endpoint.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: Client,
    config: CmsConfig,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> SyncResult<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// Runs the collection's query and decodes `result` as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, collection: Collection) -> SyncResult<Vec<T>> {
        let url = self.config.query_url();
        debug!("Querying {} from {}", collection, url);

        let mut request = self.http.get(&url).query(&[("query", collection.query())]);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|source| SyncError::Http { collection, source })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| SyncError::Http { collection, source })?;

        if !status.is_success() {
            return Err(SyncError::Status {
                collection,
                status: status.as_u16(),
                body,
            });
        }

        let decoded: QueryResponse<T> = serde_json::from_str(&body)
            .map_err(|source| SyncError::Decode { collection, source })?;
        debug!("{} query returned {} records", collection, decoded.result.len());
        Ok(decoded.result)
    }
}
