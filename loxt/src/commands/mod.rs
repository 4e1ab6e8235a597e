//! Command modules for the loxt CLI.

pub mod prompt;
pub mod render;
pub mod scan;

pub use prompt::{run_prompt, PromptArgs};
pub use scan::{run_scan, ScanArgs};
