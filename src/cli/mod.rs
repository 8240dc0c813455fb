//! Command-line interface for playing and training
//!
//! Everything that talks to a terminal lives here; the library core never
//! reads input or prints.

pub mod commands;
pub mod console;
pub mod output;
