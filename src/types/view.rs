use serde::{Deserialize, Serialize};

/// Page regions the gallery renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Container {
    #[serde(rename = "tagArea")]
    TagArea,
    #[serde(rename = "thumbnailsArea")]
    ThumbnailsArea,
    #[serde(rename = "imageArea")]
    ImageArea,
}

impl Container {
    pub const ALL: [Container; 3] = [
        Container::TagArea,
        Container::ThumbnailsArea,
        Container::ImageArea,
    ];

    /// DOM id of the element backing this container.
    pub fn element_id(&self) -> &'static str {
        match self {
            Container::TagArea => "tagArea",
            Container::ThumbnailsArea => "thumbnailsArea",
            Container::ImageArea => "imageArea",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Container::TagArea => 0,
            Container::ThumbnailsArea => 1,
            Container::ImageArea => 2,
        }
    }
}

/// What a single view is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Empty,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Short lowercase name used in snapshots and logs.
    pub fn status(&self) -> &'static str {
        match self {
            ViewState::Empty => "empty",
            ViewState::Loading => "loading",
            ViewState::Loaded(_) => "loaded",
            ViewState::Failed(_) => "failed",
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Empty
    }
}

/// Full replacement content for one container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPatch {
    pub container: Container,
    pub html: String,
    /// Set when the host should bring the container into view once rendered.
    pub scroll_into_view: bool,
}

impl RenderPatch {
    pub fn new(container: Container, html: String) -> Self {
        Self {
            container,
            html,
            scroll_into_view: false,
        }
    }

    pub fn cleared(container: Container) -> Self {
        Self::new(container, String::new())
    }
}
