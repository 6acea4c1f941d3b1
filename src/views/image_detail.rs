use crate::services::markup::{error_notice, escape_attr, escape_text};
use crate::types::gallery::{ImageDetail, ImageRef};
use crate::types::view::{Container, RenderPatch, ViewState};
use crate::views::{GalleryView, RenderContext};

/// Full-size image with its name and tags.
#[derive(Debug, Default)]
pub struct ImageDetailView {
    selected_image: Option<ImageRef>,
    state: ViewState<ImageDetail>,
}

impl ImageDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    pub fn state(&self) -> &ViewState<ImageDetail> {
        &self.state
    }

    pub fn begin_loading(&mut self, image: ImageRef) {
        self.selected_image = Some(image);
        self.state = ViewState::Loading;
    }

    pub fn show(&mut self, detail: ImageDetail) {
        self.state = ViewState::Loaded(detail);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = ViewState::Failed(message.into());
    }

    /// Back to nothing selected, as after choosing another tag.
    pub fn clear(&mut self) {
        self.selected_image = None;
        self.state = ViewState::Empty;
    }
}

impl GalleryView for ImageDetailView {
    fn container(&self) -> Container {
        Container::ImageArea
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        match &self.state {
            ViewState::Empty | ViewState::Loading => String::new(),
            ViewState::Loaded(detail) => format!(
                "<img class=\"full\" src=\"{src}\" alt=\"{alt}\"><h1 class=\"data\">{name}</h1><h3 class=\"data\">{tags}</h3>",
                src = escape_attr(&ctx.endpoints.image_src(&detail.path)),
                alt = escape_attr(&detail.name),
                name = escape_text(&detail.name),
                tags = escape_text(&detail.tags_label()),
            ),
            ViewState::Failed(message) => error_notice("Could not load image", message),
        }
    }

    fn patch(&self, ctx: &RenderContext<'_>) -> RenderPatch {
        RenderPatch {
            container: self.container(),
            html: self.render(ctx),
            scroll_into_view: matches!(self.state, ViewState::Loaded(_)),
        }
    }
}
