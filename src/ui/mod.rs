//! User interface module - console output for each step of the bump.
//!
//! The tool never prompts; everything here goes to stdout or stderr.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_current_version, display_error, display_new_version, display_status,
    display_success, display_summary,
};
