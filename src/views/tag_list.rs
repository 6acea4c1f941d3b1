use tracing::debug;

use crate::services::markup::{error_notice, escape_attr, escape_text, wrap_rows};
use crate::types::gallery::Tag;
use crate::types::view::{Container, ViewState};
use crate::views::{GalleryView, RenderContext};

/// The row of tag buttons shown when the gallery opens.
#[derive(Debug, Default)]
pub struct TagListView {
    state: ViewState<Vec<Tag>>,
}

impl TagListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<Vec<Tag>> {
        &self.state
    }

    pub fn begin_loading(&mut self) {
        self.state = ViewState::Loading;
    }

    pub fn show(&mut self, tags: Vec<Tag>) {
        debug!(count = tags.len(), "tags loaded");
        self.state = ViewState::Loaded(tags);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = ViewState::Failed(message.into());
    }
}

impl GalleryView for TagListView {
    fn container(&self) -> Container {
        Container::TagArea
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        match &self.state {
            ViewState::Empty | ViewState::Loading => String::new(),
            ViewState::Loaded(tags) => wrap_rows(
                tags.iter().map(|tag| tag_button(tag)),
                ctx.layout.row_length,
            ),
            ViewState::Failed(message) => error_notice("Could not load tags", message),
        }
    }
}

fn tag_button(tag: &str) -> String {
    format!(
        "<button class=\"tag\" type=\"button\" data-tag=\"{}\">{}</button>",
        escape_attr(tag),
        escape_text(tag)
    )
}
