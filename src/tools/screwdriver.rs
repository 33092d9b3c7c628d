//! screw_driver tool - turns screws, or at least goes through the motions

use std::io::Write;

use super::Tool;
use crate::error::Result;

pub struct ScrewDriver;

impl Tool for ScrewDriver {
    fn name(&self) -> &'static str {
        "screw_driver"
    }

    fn description(&self) -> &'static str {
        "Turns screws, mostly in circles"
    }

    fn apply(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "screwing around")?;
        Ok(())
    }
}
