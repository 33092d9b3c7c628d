//! Tool system - the trait every tool shares, plus the stock variants
//!
//! A tool is a named capability with a single no-argument operation.
//! Applying it writes one line to the output sink; tools carry no state
//! and no identity beyond their type.

mod hammer;
mod screwdriver;

pub use hammer::Hammer;
pub use screwdriver::ScrewDriver;

use std::io::Write;

use crate::error::Result;

/// A capability the worker can pick up and apply
pub trait Tool: Send + Sync {
    /// Tool name (unique within a catalog)
    fn name(&self) -> &'static str;

    /// Human-readable description for listings
    fn description(&self) -> &'static str;

    /// Apply the tool, writing its line to `out`
    fn apply(&self, out: &mut dyn Write) -> Result<()>;
}
