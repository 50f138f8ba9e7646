//! Page lifecycle: render exactly once when the document has loaded

use tracing::debug;

use crate::application::document::Document;
use crate::application::services::render::RenderService;
use crate::application::ApplicationResult;
use crate::domain::RenderOutcome;

/// A loaded document plus the one-shot render hooked to its ready event.
pub struct Page<D: Document> {
    document: D,
    service: RenderService,
    fired: bool,
}

impl<D: Document> Page<D> {
    /// Wrap a fully parsed document. Nothing is rendered until [`Page::content_loaded`].
    pub fn new(document: D, service: RenderService) -> Self {
        debug!("document loaded");
        Self {
            document,
            service,
            fired: false,
        }
    }

    /// Wrap a parsed document and fire its ready event.
    pub fn open(document: D, service: RenderService) -> ApplicationResult<(Self, RenderOutcome)> {
        let mut page = Self::new(document, service);
        let outcome = page.render_once()?;
        Ok((page, outcome))
    }

    /// Ready event. Renders on the first call; later calls return `None`.
    pub fn content_loaded(&mut self) -> ApplicationResult<Option<RenderOutcome>> {
        if self.fired {
            debug!("content_loaded: already handled");
            return Ok(None);
        }
        self.render_once().map(Some)
    }

    fn render_once(&mut self) -> ApplicationResult<RenderOutcome> {
        self.fired = true;
        self.service.render(&mut self.document)
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }
}
