use serde::{Deserialize, Serialize};

/// A label used to filter images.
pub type Tag = String;

/// Opaque identifier of one image: its path inside the gallery.
pub type ImageRef = String;

/// Metadata for a single image as returned by the image-data endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetail {
    /// Location the full-size image is fetched from.
    pub path: String,
    /// Display title.
    pub name: String,
    pub tags: Vec<String>,
}

impl ImageDetail {
    /// Tags wrapped in brackets and joined by bare commas, e.g. `[desert,orange]`.
    pub fn tags_label(&self) -> String {
        format!("[{}]", self.tags.join(","))
    }
}

/// One read against the gallery data endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Tags,
    Urls(Tag),
    ImageData(ImageRef),
}

/// Successful payload of an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Tags(Vec<Tag>),
    Urls(Vec<ImageRef>),
    ImageData(ImageDetail),
}
