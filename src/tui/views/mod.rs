//! Views for the TUI

pub mod help;
pub mod trigger;

// vim: ts=4
