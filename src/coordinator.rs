//! Coordinator - holds exactly one worker and tells him to get going
//!
//! Delegation only; the coordinator adds no logic of its own.

use std::io::Write;

use crate::error::{Result, WorkbenchError};
use crate::worker::Work;

/// Something that can put a worker to work
pub trait Supervise: Send + Sync {
    /// Kick off the held worker, writing progress to `out`
    fn put_to_work(&self, out: &mut dyn Write) -> Result<()>;
}

/// Coordinator composing exactly one worker
pub struct Coordinator {
    worker: Box<dyn Work>,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator").finish_non_exhaustive()
    }
}

impl Coordinator {
    /// Create a coordinator around an existing worker
    pub fn new(worker: Box<dyn Work>) -> Self {
        Self { worker }
    }

    /// Builder for wiring sites where the worker may be absent
    pub fn builder() -> CoordinatorBuilder {
        CoordinatorBuilder::default()
    }
}

impl Supervise for Coordinator {
    fn put_to_work(&self, out: &mut dyn Write) -> Result<()> {
        self.worker.work(out)
    }
}

/// Builder where the worker stays optional until build
#[derive(Default)]
pub struct CoordinatorBuilder {
    worker: Option<Box<dyn Work>>,
}

impl CoordinatorBuilder {
    /// Supply the worker
    pub fn worker(mut self, worker: Box<dyn Work>) -> Self {
        self.worker = Some(worker);
        self
    }

    /// Build the coordinator, failing if no worker was supplied
    pub fn build(self) -> Result<Coordinator> {
        let worker = self
            .worker
            .ok_or(WorkbenchError::MissingDependency("worker"))?;
        Ok(Coordinator::new(worker))
    }
}
