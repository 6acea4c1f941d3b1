//! Gallery data client.
//!
//! `GalleryApi` is the async seam between the views and wherever gallery data
//! lives. `HttpGalleryApi` talks to the REST endpoints; `Endpoints` builds every
//! URL the front end uses, encoding identifiers on the way in.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::errors::GalleryError;
use crate::types::gallery::{ApiRequest, ApiResponse, ImageDetail, ImageRef, Tag};

/// Characters encoded inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters encoded inside a query parameter value. `/` stays readable.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Trait defining gallery data operations.
#[async_trait]
pub trait GalleryApi: Send + Sync {
    async fn fetch_tags(&self) -> Result<Vec<Tag>, GalleryError>;
    async fn fetch_urls(&self, tag: &str) -> Result<Vec<ImageRef>, GalleryError>;
    async fn fetch_image_data(&self, image: &str) -> Result<ImageDetail, GalleryError>;
}

/// Runs `request` against `api`, wrapping the payload in the matching response.
pub async fn dispatch(
    api: &dyn GalleryApi,
    request: &ApiRequest,
) -> Result<ApiResponse, GalleryError> {
    match request {
        ApiRequest::Tags => api.fetch_tags().await.map(ApiResponse::Tags),
        ApiRequest::Urls(tag) => api.fetch_urls(tag).await.map(ApiResponse::Urls),
        ApiRequest::ImageData(image) => {
            api.fetch_image_data(image).await.map(ApiResponse::ImageData)
        }
    }
}

/// URL builder for the gallery endpoints, rooted at a base URL.
///
/// An empty base yields relative URLs, resolved by the page that uses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}/", trimmed)
        };
        Self { base }
    }

    /// Base URL with its trailing slash, or empty for relative URLs.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn tags_url(&self) -> String {
        format!("{}rest/data/tags", self.base)
    }

    pub fn urls_url(&self, tag: &str) -> String {
        format!("{}rest/data/urls/{}", self.base, encode_segment(tag))
    }

    pub fn image_data_url(&self, image: &str) -> String {
        format!("{}rest/data/imageData/{}", self.base, encode_segment(image))
    }

    pub fn thumbnail_src(&self, image: &str) -> String {
        format!("{}thumbnails?url={}", self.base, encode_query(image))
    }

    pub fn image_src(&self, path: &str) -> String {
        format!("{}getImage?url={}", self.base, encode_query(path))
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        match request {
            ApiRequest::Tags => self.tags_url(),
            ApiRequest::Urls(tag) => self.urls_url(tag),
            ApiRequest::ImageData(image) => self.image_data_url(image),
        }
    }
}

/// Percent-encodes `value` so it stays a single path segment.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Percent-encodes `value` for use as a query parameter value.
pub fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Gallery client backed by the REST endpoints.
pub struct HttpGalleryApi {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpGalleryApi {
    /// Creates a client for `endpoints`. The base URL must be absolute.
    pub fn new(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self, GalleryError> {
        reqwest::Url::parse(&endpoints.tags_url()).map_err(|e| {
            GalleryError::InvalidEndpoint(format!("{:?}: {}", endpoints.base_url(), e))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GalleryError::Network(e.to_string()))?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GalleryError> {
        debug!(url, "gallery request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GalleryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GalleryError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| GalleryError::Decode(e.to_string()))
    }
}

#[async_trait]
impl GalleryApi for HttpGalleryApi {
    async fn fetch_tags(&self) -> Result<Vec<Tag>, GalleryError> {
        self.get_json(&self.endpoints.tags_url()).await
    }

    async fn fetch_urls(&self, tag: &str) -> Result<Vec<ImageRef>, GalleryError> {
        self.get_json(&self.endpoints.urls_url(tag)).await
    }

    async fn fetch_image_data(&self, image: &str) -> Result<ImageDetail, GalleryError> {
        // The server answers `null` for paths it does not know.
        let detail: Option<ImageDetail> =
            self.get_json(&self.endpoints.image_data_url(image)).await?;
        detail.ok_or_else(|| GalleryError::NotFound(image.to_string()))
    }
}
