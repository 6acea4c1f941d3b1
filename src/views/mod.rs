//! Gallery views.
//!
//! Each view owns the state of one page container and renders it to an HTML
//! fragment. Views never touch the page directly: the host applies the
//! resulting [`RenderPatch`]es.

pub mod image_detail;
pub mod page;
pub mod tag_list;
pub mod thumbnail_grid;

use crate::services::gallery_api::Endpoints;
use crate::types::settings::LayoutSettings;
use crate::types::view::{Container, RenderPatch};

pub use image_detail::ImageDetailView;
pub use tag_list::TagListView;
pub use thumbnail_grid::ThumbnailGridView;

/// Everything a view needs besides its own state to render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub endpoints: &'a Endpoints,
    pub layout: &'a LayoutSettings,
}

/// Shared interface of the three gallery views.
pub trait GalleryView {
    fn container(&self) -> Container;
    fn render(&self, ctx: &RenderContext<'_>) -> String;

    fn patch(&self, ctx: &RenderContext<'_>) -> RenderPatch {
        RenderPatch::new(self.container(), self.render(ctx))
    }
}
