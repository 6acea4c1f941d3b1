use tracing::debug;

use crate::services::markup::{error_notice, escape_attr, wrap_rows};
use crate::types::gallery::{ImageRef, Tag};
use crate::types::view::{Container, ViewState};
use crate::views::{GalleryView, RenderContext};

/// Thumbnails of every image carrying the selected tag.
#[derive(Debug, Default)]
pub struct ThumbnailGridView {
    selected_tag: Option<Tag>,
    state: ViewState<Vec<ImageRef>>,
}

impl ThumbnailGridView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn state(&self) -> &ViewState<Vec<ImageRef>> {
        &self.state
    }

    /// Forgets the previous grid and waits for the images of `tag`.
    pub fn begin_loading(&mut self, tag: Tag) {
        self.selected_tag = Some(tag);
        self.state = ViewState::Loading;
    }

    pub fn show(&mut self, images: Vec<ImageRef>) {
        debug!(tag = ?self.selected_tag, count = images.len(), "thumbnails loaded");
        self.state = ViewState::Loaded(images);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = ViewState::Failed(message.into());
    }
}

impl GalleryView for ThumbnailGridView {
    fn container(&self) -> Container {
        Container::ThumbnailsArea
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        match &self.state {
            ViewState::Empty | ViewState::Loading => String::new(),
            ViewState::Loaded(images) => wrap_rows(
                images.iter().map(|image| {
                    format!(
                        "<img class=\"thumbnail\" data-image=\"{id}\" src=\"{src}\" alt=\"{id}\">",
                        id = escape_attr(image),
                        src = escape_attr(&ctx.endpoints.thumbnail_src(image)),
                    )
                }),
                ctx.layout.row_length,
            ),
            ViewState::Failed(message) => error_notice("Could not load images", message),
        }
    }
}
