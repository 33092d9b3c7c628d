//! Worker - applies every held tool in order, framed by begin/end lines
//!
//! The worker is constructed with its tools already in hand and never
//! mutated afterwards. A tool failure propagates unchanged; there is no
//! retry and no partial-failure handling.

use std::io::Write;

use log::debug;

use crate::error::{Result, WorkbenchError};
use crate::tools::Tool;

const BEGIN_MESSAGE: &str = "Begin work...";
const END_MESSAGE: &str = "Time to rest now...";

/// Something that can do a unit of work against an output sink
pub trait Work: Send + Sync {
    /// Do the work, writing progress to `out`
    fn work(&self, out: &mut dyn Write) -> Result<()>;
}

/// Worker holding a fixed, ordered collection of tools
pub struct Worker {
    tools: Vec<Box<dyn Tool>>,
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("tools", &self.tools.len())
            .finish()
    }
}

impl Worker {
    /// Create a worker from an existing tool sequence (empty is valid)
    pub fn new(tools: Vec<Box<dyn Tool>>) -> Self {
        Self { tools }
    }

    /// Builder for wiring sites where the tool sequence may be absent
    pub fn builder() -> WorkerBuilder {
        WorkerBuilder::default()
    }

    /// Number of tools the worker holds
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

impl Work for Worker {
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        debug!("starting work with {} tools", self.tools.len());
        writeln!(out, "{}", BEGIN_MESSAGE)?;
        for tool in &self.tools {
            tool.apply(out)?;
        }
        writeln!(out, "{}", END_MESSAGE)?;
        Ok(())
    }
}

/// Builder where the tool sequence stays optional until build
///
/// Building without ever supplying a sequence fails; supplying an empty
/// one succeeds and the worker simply has nothing to apply.
#[derive(Default)]
pub struct WorkerBuilder {
    tools: Option<Vec<Box<dyn Tool>>>,
}

impl WorkerBuilder {
    /// Supply the full tool sequence
    pub fn tools(mut self, tools: Vec<Box<dyn Tool>>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Append one tool, creating the sequence if it was absent
    pub fn tool(mut self, tool: Box<dyn Tool>) -> Self {
        self.tools.get_or_insert_with(Vec::new).push(tool);
        self
    }

    /// Build the worker, failing if no tool sequence was supplied
    pub fn build(self) -> Result<Worker> {
        let tools = self
            .tools
            .ok_or(WorkbenchError::MissingDependency("tools"))?;
        Ok(Worker::new(tools))
    }
}
