//! Domain logic - pure version rules independent of files and git

pub mod version;

pub use version::{BumpLevel, Version};
