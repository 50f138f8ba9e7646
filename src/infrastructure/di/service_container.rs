//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::{MarkupService, Page, RenderService};
use crate::config::Settings;
use crate::domain::RenderOutcome;
use crate::infrastructure::html::HtmlDocument;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, STDIO_PATH};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding settings and I/O dependencies, handing out configured services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    pub fn render_service(&self) -> RenderService {
        RenderService::new(self.settings.malformed_depth)
    }

    pub fn markup_service(&self) -> MarkupService {
        MarkupService::new(self.settings.markup.url_template.clone())
    }

    /// Read a file, or stdin for `-`.
    pub fn read_input(&self, path: &Path) -> InfraResult<String> {
        if path == Path::new(STDIO_PATH) {
            return self
                .fs
                .read_stdin()
                .map_err(|e| InfraError::io("read stdin", e));
        }
        if !self.fs.exists(path) {
            return Err(InfraError::io(
                format!("input not found: {}", path.display()),
                std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
            ));
        }
        self.fs
            .read_to_string(path)
            .map_err(|e| InfraError::io(format!("read {}", path.display()), e))
    }

    /// Write to a file, or return the content for stdout when `path` is `None` or `-`.
    pub fn write_output(&self, path: Option<&Path>, content: &str) -> InfraResult<Option<String>> {
        match path {
            Some(p) if p != Path::new(STDIO_PATH) => {
                debug!("write_output: {} bytes to {}", content.len(), p.display());
                self.fs
                    .write(p, content)
                    .map_err(|e| InfraError::io(format!("write {}", p.display()), e))?;
                Ok(None)
            }
            _ => Ok(Some(content.to_string())),
        }
    }

    /// Load an HTML page from `path` and fire its ready event.
    pub fn open_page(&self, path: &Path) -> InfraResult<(Page<HtmlDocument>, RenderOutcome)> {
        let source = self.read_input(path)?;
        let document = HtmlDocument::parse(source)?;
        Ok(Page::open(document, self.render_service())?)
    }
}
