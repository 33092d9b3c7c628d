//! Tool catalog - the ordered registry of tool variants
//!
//! Holds every registered tool exactly once, in registration order.
//! Registration order is what the worker later applies, so it must be
//! deterministic for reproducible output.

use crate::error::{Result, WorkbenchError};
use crate::tools::Tool;

/// Catalog of registered tools, ordered by registration
#[derive(Default)]
pub struct ToolCatalog {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. Names are unique; re-registering a name is refused.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<()> {
        if self.contains(tool.name()) {
            return Err(WorkbenchError::DuplicateTool(tool.name().to_string()));
        }
        self.tools.push(tool);
        Ok(())
    }

    /// Check whether a tool name is already registered
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool.name() == name)
    }

    /// Tool names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Iterate registered tools in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.iter().map(|tool| tool.as_ref())
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the catalog has no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Consume the catalog, yielding the tools in registration order
    pub fn into_tools(self) -> Vec<Box<dyn Tool>> {
        self.tools
    }
}
