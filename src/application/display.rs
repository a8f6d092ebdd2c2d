//! Display use case: render a tree with the effective settings.

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{Node, RenderOptions, Renderer};

/// Renders document trees according to [`Settings`].
pub struct DisplayService {
    renderer: Renderer,
}

impl DisplayService {
    pub fn new(settings: &Settings) -> Self {
        Self::with_options(settings.render_options())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            renderer: Renderer::new(options),
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Writes `node` and its descendants to `out`, starting at `indent` spaces.
    #[instrument(level = "debug", skip(self, node, out), fields(root = %node.id()))]
    pub fn write<W: Write>(&self, node: &Node, out: &mut W, indent: usize) -> ApplicationResult<()> {
        debug!(nodes = node.node_count(), "rendering tree");
        self.renderer
            .write_to(node, out, indent)
            .map_err(|e| ApplicationError::io("write rendered tree", e))?;
        out.flush()
            .map_err(|e| ApplicationError::io("flush output", e))
    }

    pub fn render(&self, node: &Node, indent: usize) -> String {
        self.renderer.render(node, indent)
    }
}
