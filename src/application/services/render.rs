//! Product area rendering service
//!
//! Reads marker elements from a [`Document`], turns them into nodes and renders them into
//! the tree container.

use tracing::{debug, error, info, warn};

use crate::application::document::Document;
use crate::application::ApplicationResult;
use crate::domain::{self, DepthPolicy, ProductAreaNode, RenderOutcome, CONTAINER_ID};

/// Service rendering the product area tree of a document.
#[derive(Debug, Clone, Default)]
pub struct RenderService {
    policy: DepthPolicy,
}

impl RenderService {
    /// Create a new render service.
    pub fn new(policy: DepthPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DepthPolicy {
        self.policy
    }

    /// Extract nodes from all marker elements, in document order.
    pub fn extract(&self, document: &dyn Document) -> ApplicationResult<Vec<ProductAreaNode>> {
        let elements = document.source_elements();
        info!("product area elements found: {}", elements.len());

        let mut nodes = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let node = ProductAreaNode::from_source(index, element, self.policy)?;
            if element.parsed_depth().is_none() {
                warn!(
                    "element {}: malformed data-depth {:?}, using 0",
                    index, element.depth
                );
            }
            if element.name.is_none() || element.url.is_none() {
                debug!("element {}: missing data-name or data-url", index);
            }
            nodes.push(node);
        }
        Ok(nodes)
    }

    /// Replace the tree container's content with one row per marker element.
    ///
    /// A missing container is not an error: it is logged and the document stays untouched.
    pub fn render(&self, document: &mut dyn Document) -> ApplicationResult<RenderOutcome> {
        let nodes = self.extract(document)?;

        let outcome = domain::render(&nodes, document.mount_point(CONTAINER_ID));
        match outcome {
            RenderOutcome::ContainerMissing => error!("tree container not found: #{}", CONTAINER_ID),
            RenderOutcome::Rendered { rows } => debug!("render: {} rows", rows),
        }
        Ok(outcome)
    }
}
