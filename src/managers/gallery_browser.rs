//! Gallery drill-down state: tags -> thumbnails -> image detail.
//!
//! The browser owns the three views and decides which response may touch
//! which container. Fetching is left to the host: every navigation returns a
//! [`FetchTicket`] that the host runs (see `services::gallery_api::dispatch`)
//! and hands back to [`GalleryBrowserTrait::complete`].

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::managers::request_tracker::RequestTracker;
use crate::services::gallery_api::Endpoints;
use crate::types::errors::GalleryError;
use crate::types::gallery::{ApiRequest, ApiResponse, ImageRef, Tag};
use crate::types::settings::LayoutSettings;
use crate::types::view::{Container, RenderPatch, ViewState};
use crate::views::{GalleryView, ImageDetailView, RenderContext, TagListView, ThumbnailGridView};

/// One fetch the host must perform, stamped with its request generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: ApiRequest,
}

impl FetchTicket {
    /// Container the response will be rendered into.
    pub fn container(&self) -> Container {
        match self.request {
            ApiRequest::Tags => Container::TagArea,
            ApiRequest::Urls(_) => Container::ThumbnailsArea,
            ApiRequest::ImageData(_) => Container::ImageArea,
        }
    }
}

/// Result of a user action: patches to apply now, and the fetch to run.
#[derive(Debug, Clone)]
pub struct Navigation {
    pub patches: Vec<RenderPatch>,
    pub ticket: FetchTicket,
}

/// Status of one view, as reported by [`GalleryBrowserTrait::snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSummary {
    pub status: &'static str,
    pub items: usize,
    pub error: Option<String>,
}

impl ViewSummary {
    fn of<T>(state: &ViewState<T>, count: impl Fn(&T) -> usize) -> Self {
        Self {
            status: state.status(),
            items: state.loaded().map(count).unwrap_or(0),
            error: match state {
                ViewState::Failed(message) => Some(message.clone()),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserSnapshot {
    pub selected_tag: Option<Tag>,
    pub selected_image: Option<ImageRef>,
    pub tags: ViewSummary,
    pub thumbnails: ViewSummary,
    pub detail: ViewSummary,
}

/// Trait defining the gallery navigation interface.
pub trait GalleryBrowserTrait {
    fn load_tags(&mut self) -> Navigation;
    fn page_ready(&mut self) -> Navigation;
    fn select_tag(&mut self, tag: &str) -> Navigation;
    fn select_image(&mut self, image: &str) -> Navigation;
    fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ApiResponse, GalleryError>,
    ) -> Vec<RenderPatch>;
    fn render_all(&self) -> Vec<RenderPatch>;
    fn snapshot(&self) -> BrowserSnapshot;
}

/// In-memory gallery browser.
pub struct GalleryBrowser {
    endpoints: Endpoints,
    layout: LayoutSettings,
    tag_list: TagListView,
    thumbnails: ThumbnailGridView,
    detail: ImageDetailView,
    tracker: RequestTracker,
}

impl GalleryBrowser {
    pub fn new(endpoints: Endpoints, layout: LayoutSettings) -> Self {
        Self {
            endpoints,
            layout,
            tag_list: TagListView::new(),
            thumbnails: ThumbnailGridView::new(),
            detail: ImageDetailView::new(),
            tracker: RequestTracker::new(),
        }
    }

    /// Swaps URL roots and layout; already rendered content is left as is.
    pub fn reconfigure(&mut self, endpoints: Endpoints, layout: LayoutSettings) {
        self.endpoints = endpoints;
        self.layout = layout;
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn layout(&self) -> &LayoutSettings {
        &self.layout
    }

    pub fn tag_list(&self) -> &TagListView {
        &self.tag_list
    }

    pub fn thumbnails(&self) -> &ThumbnailGridView {
        &self.thumbnails
    }

    pub fn detail(&self) -> &ImageDetailView {
        &self.detail
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext {
            endpoints: &self.endpoints,
            layout: &self.layout,
        }
    }

    fn patch_for(&self, container: Container) -> RenderPatch {
        let ctx = self.context();
        match container {
            Container::TagArea => self.tag_list.patch(&ctx),
            Container::ThumbnailsArea => self.thumbnails.patch(&ctx),
            Container::ImageArea => self.detail.patch(&ctx),
        }
    }

    fn ticket(&mut self, request: ApiRequest) -> FetchTicket {
        let mut ticket = FetchTicket {
            generation: 0,
            request,
        };
        ticket.generation = self.tracker.issue(ticket.container());
        debug!(
            container = ticket.container().element_id(),
            generation = ticket.generation,
            "request issued"
        );
        ticket
    }

    fn fail(&mut self, container: Container, message: String) {
        match container {
            Container::TagArea => self.tag_list.fail(message),
            Container::ThumbnailsArea => self.thumbnails.fail(message),
            Container::ImageArea => self.detail.fail(message),
        }
    }
}

impl GalleryBrowserTrait for GalleryBrowser {
    fn load_tags(&mut self) -> Navigation {
        self.tag_list.begin_loading();
        let ticket = self.ticket(ApiRequest::Tags);
        Navigation {
            patches: vec![self.patch_for(Container::TagArea)],
            ticket,
        }
    }

    /// Reloads the tags for a freshly (re)loaded page and restores the
    /// thumbnail and detail containers from the current view state.
    fn page_ready(&mut self) -> Navigation {
        let mut navigation = self.load_tags();
        navigation.patches.extend(
            self.render_all()
                .into_iter()
                .filter(|patch| patch.container != Container::TagArea),
        );
        navigation
    }

    /// Clears the thumbnail grid and the detail view, then requests the
    /// images of `tag`. Outstanding thumbnail and detail fetches go stale.
    fn select_tag(&mut self, tag: &str) -> Navigation {
        info!(tag, "tag selected");
        self.thumbnails.begin_loading(tag.to_string());
        self.detail.clear();
        self.tracker.issue(Container::ImageArea);
        let ticket = self.ticket(ApiRequest::Urls(tag.to_string()));
        Navigation {
            patches: vec![
                self.patch_for(Container::ThumbnailsArea),
                self.patch_for(Container::ImageArea),
            ],
            ticket,
        }
    }

    fn select_image(&mut self, image: &str) -> Navigation {
        info!(image, "image selected");
        self.detail.begin_loading(image.to_string());
        let ticket = self.ticket(ApiRequest::ImageData(image.to_string()));
        Navigation {
            patches: vec![self.patch_for(Container::ImageArea)],
            ticket,
        }
    }

    /// Applies a fetch result if its ticket is still current.
    ///
    /// Returns the patch for the affected container, or nothing when a newer
    /// request has superseded the ticket.
    fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ApiResponse, GalleryError>,
    ) -> Vec<RenderPatch> {
        let container = ticket.container();
        if !self.tracker.is_current(container, ticket.generation) {
            debug!(
                container = container.element_id(),
                generation = ticket.generation,
                current = self.tracker.current(container),
                "dropping stale response"
            );
            return Vec::new();
        }

        match (&ticket.request, result) {
            (ApiRequest::Tags, Ok(ApiResponse::Tags(tags))) => self.tag_list.show(tags),
            (ApiRequest::Urls(_), Ok(ApiResponse::Urls(images))) => self.thumbnails.show(images),
            (ApiRequest::ImageData(_), Ok(ApiResponse::ImageData(detail))) => {
                self.detail.show(detail)
            }
            (request, Ok(response)) => {
                warn!(?request, ?response, "response does not match request");
                self.fail(container, "unexpected response from server".to_string());
            }
            (request, Err(err)) => {
                warn!(?request, error = %err, "gallery fetch failed");
                self.fail(container, err.to_string());
            }
        }

        vec![self.patch_for(container)]
    }

    fn render_all(&self) -> Vec<RenderPatch> {
        Container::ALL
            .iter()
            .map(|&container| self.patch_for(container))
            .collect()
    }

    fn snapshot(&self) -> BrowserSnapshot {
        BrowserSnapshot {
            selected_tag: self.thumbnails.selected_tag().map(str::to_string),
            selected_image: self.detail.selected_image().map(str::to_string),
            tags: ViewSummary::of(self.tag_list.state(), Vec::len),
            thumbnails: ViewSummary::of(self.thumbnails.state(), Vec::len),
            detail: ViewSummary::of(self.detail.state(), |_| 1),
        }
    }
}
