//! Command line surface: flag parsing and the bump workflow it drives

pub mod args;
pub mod orchestration;

pub use args::{normalize_args, Args};
pub use orchestration::{run_bump_workflow, WorkflowResult};
