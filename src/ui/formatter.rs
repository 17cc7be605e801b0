//! Pure formatting functions for UI output.
//!
//! Builders return the styled line so callers and tests can inspect it;
//! `display_*` wrappers print it to the right stream.

use console::style;

use crate::domain::Version;

/// Build an error line with a red `ERROR:` prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Build a success line with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Build a status line with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Build the line reporting the version text found on a declaration line.
pub fn format_current_version(raw: &str) -> String {
    format!("Current version: {}", raw)
}

/// Build the line reporting the version written back to a declaration line.
pub fn format_new_version(version: &Version) -> String {
    format!("New version: {}", style(version).green())
}

/// Build the final summary line.
///
/// # Arguments
/// * `version` - The version now recorded in `metadata.rb`
/// * `remotes` - Remotes that received the push (empty when nothing was pushed)
pub fn format_summary(version: &Version, remotes: &[String]) -> String {
    if remotes.is_empty() {
        format_success(&format!("Cookbook version {} staged", version))
    } else {
        format_success(&format!(
            "Cookbook version {} published to {}",
            version,
            remotes.join(", ")
        ))
    }
}

/// Display the quoted version text exactly as it appears in the file,
/// before it is parsed.
pub fn display_current_version(raw: &str) {
    println!("{}", format_current_version(raw));
}

/// Display the version written back to a declaration line.
pub fn display_new_version(version: &Version) {
    println!("{}", format_new_version(version));
}

/// Display the final summary once all steps succeeded.
pub fn display_summary(version: &Version, remotes: &[String]) {
    println!("{}", format_summary(version, remotes));
}
