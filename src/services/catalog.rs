//! In-process gallery data loaded from a descriptor file.
//!
//! The descriptor lists images as three-line records:
//!
//! ```text
//! sunset01.jpg
//! Sunset over the bay
//! sunset, sea, orange
//! ```
//!
//! The first line is the image path, the second its display name and the
//! third its comma-separated tags. Blank lines between records are ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::services::gallery_api::GalleryApi;
use crate::types::errors::{CatalogError, GalleryError};
use crate::types::gallery::{ImageDetail, ImageRef, Tag};

/// Gallery images indexed by tag.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    images: Vec<ImageDetail>,
    // tag -> indices into `images`, in descriptor order
    by_tag: BTreeMap<String, Vec<usize>>,
}

impl Catalog {
    /// Reads and parses the descriptor at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::parse(&content)?;
        info!(
            path = %path.display(),
            images = catalog.len(),
            tags = catalog.by_tag.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses descriptor text into a catalog.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let mut images = Vec::new();
        let mut record: Vec<(usize, &str)> = Vec::with_capacity(3);

        for (index, line) in content.lines().enumerate() {
            if record.is_empty() && line.trim().is_empty() {
                continue;
            }
            record.push((index + 1, line));
            if record.len() == 3 {
                images.push(Self::parse_record(&record));
                record.clear();
            }
        }

        if let Some((line, _)) = record.first() {
            return Err(CatalogError::Malformed {
                line: *line,
                reason: format!(
                    "incomplete record: expected path, name and tags, found {} line(s)",
                    record.len()
                ),
            });
        }

        Ok(Self::from_images(images))
    }

    /// Builds a catalog from already parsed records.
    pub fn from_images(images: Vec<ImageDetail>) -> Self {
        let mut by_tag: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, image) in images.iter().enumerate() {
            for tag in &image.tags {
                let indices = by_tag.entry(tag.clone()).or_default();
                if indices.last() != Some(&index) {
                    indices.push(index);
                }
            }
        }
        Self { images, by_tag }
    }

    // Records never start with a blank line, so the path is non-empty.
    fn parse_record(record: &[(usize, &str)]) -> ImageDetail {
        let tags = record[2]
            .1
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        ImageDetail {
            path: record[0].1.trim().to_string(),
            name: record[1].1.trim().to_string(),
            tags,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// All distinct tags, sorted ascending.
    pub fn tags(&self) -> Vec<Tag> {
        self.by_tag.keys().cloned().collect()
    }

    /// Paths of images carrying `tag`, in descriptor order.
    pub fn urls(&self, tag: &str) -> Option<Vec<ImageRef>> {
        self.by_tag.get(tag).map(|indices| {
            indices
                .iter()
                .map(|&i| self.images[i].path.clone())
                .collect()
        })
    }

    /// The first image recorded under `path`.
    pub fn image(&self, path: &str) -> Option<&ImageDetail> {
        self.images.iter().find(|image| image.path == path)
    }
}

#[async_trait]
impl GalleryApi for Catalog {
    async fn fetch_tags(&self) -> Result<Vec<Tag>, GalleryError> {
        Ok(self.tags())
    }

    async fn fetch_urls(&self, tag: &str) -> Result<Vec<ImageRef>, GalleryError> {
        self.urls(tag)
            .ok_or_else(|| GalleryError::NotFound(format!("tag {}", tag)))
    }

    async fn fetch_image_data(&self, image: &str) -> Result<ImageDetail, GalleryError> {
        self.image(image)
            .cloned()
            .ok_or_else(|| GalleryError::NotFound(format!("image {}", image)))
    }
}
