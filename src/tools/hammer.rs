//! hammer tool - hits things until they stop moving

use std::io::Write;

use super::Tool;
use crate::error::Result;

pub struct Hammer;

impl Tool for Hammer {
    fn name(&self) -> &'static str {
        "hammer"
    }

    fn description(&self) -> &'static str {
        "Hits things until they stop moving"
    }

    fn apply(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "I'm hammered")?;
        Ok(())
    }
}
