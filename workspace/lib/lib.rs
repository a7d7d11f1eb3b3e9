//! Driver-side pieces for the `boxwave` programs: command-line configuration
//! and the GIF renderer that consumes computed frames.

pub mod cli;
pub mod render;
