//! Workshop - the composition root
//!
//! The one place where concrete implementations are instantiated and
//! wired to their abstract dependencies: catalog tools go to the worker,
//! the worker goes to the coordinator, and the coordinator is invoked.

use std::io::Write;

use log::info;

use crate::catalog::ToolCatalog;
use crate::coordinator::{Coordinator, Supervise};
use crate::error::Result;
use crate::tools::{Hammer, ScrewDriver};
use crate::worker::Worker;

/// Catalog holding the stock tool variants, in registration order
pub fn standard_catalog() -> Result<ToolCatalog> {
    let mut catalog = ToolCatalog::new();
    catalog.register(Box::new(ScrewDriver))?;
    catalog.register(Box::new(Hammer))?;
    Ok(catalog)
}

/// Wire the full graph: catalog tools into a worker, worker into a coordinator
pub fn assemble(catalog: ToolCatalog) -> Result<Coordinator> {
    info!("assembling crew with tools: {:?}", catalog.names());
    let worker = Worker::builder().tools(catalog.into_tools()).build()?;
    Coordinator::builder().worker(Box::new(worker)).build()
}

/// Assemble the graph and put the crew to work exactly once
pub fn run_once(catalog: ToolCatalog, out: &mut dyn Write) -> Result<()> {
    assemble(catalog)?.put_to_work(out)
}
