use std::path::Path;

use crate::error::RenderError;

use super::spec::ChartSpec;

/// Something that can draw a chart spec.
///
/// Injected into the session at construction so the session never knows
/// which rendering backend is in use.
pub trait RenderSurface: Send + Sync {
    fn name(&self) -> &'static str;

    fn create(&self, spec: &ChartSpec) -> Result<Box<dyn RenderHandle>, RenderError>;
}

/// A live chart instance owned by a session.
pub trait RenderHandle: Send {
    fn id(&self) -> u64;

    /// File backing this chart, for surfaces that render to disk.
    fn artifact(&self) -> Option<&Path> {
        None
    }

    /// Release the chart. Consumes the handle so it cannot be reused.
    fn destroy(self: Box<Self>);
}
