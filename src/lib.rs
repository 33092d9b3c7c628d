//! Workbench - a hand-wired crew of tools, a worker, and a coordinator
//!
//! Workbench builds a small object graph at a single composition root:
//! every tool registered in the catalog goes to the worker, the worker
//! goes to the coordinator, and the coordinator is invoked exactly once.

pub mod catalog;
pub mod coordinator;
pub mod error;
pub mod tools;
pub mod worker;
pub mod workshop;

pub use error::{Result, WorkbenchError};
