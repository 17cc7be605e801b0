//! Rewriting of the version declaration in a cookbook's `metadata.rb`.
//!
//! Every line containing the substring `version` is treated as a
//! declaration: the text between its first pair of single quotes is
//! parsed, bumped and written back. Other lines are left byte-identical.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::domain::Version;
use crate::error::{BumpError, Result};
use crate::ui;

/// Name of the metadata file inside a cookbook directory
pub const METADATA_FILE: &str = "metadata.rb";

const VERSION_MARKER: &str = "version";
const QUOTE: char = '\'';

/// A single rewritten declaration line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionChange {
    /// 1-based line number in the metadata file
    pub line: usize,
    pub previous: Version,
    pub current: Version,
}

/// Path of `metadata.rb` inside the given cookbook directory
pub fn metadata_path(cookbook: &Path) -> PathBuf {
    cookbook.join(METADATA_FILE)
}

/// Bumps every version declaration in `contents`.
///
/// Lines are split on `'\n'` and rejoined the same way, so trailing
/// newlines and carriage returns survive untouched. Each declaration's
/// quoted text is printed before it is parsed, and its new version after.
///
/// # Returns
/// * `Ok((String, Vec<VersionChange>))` - Rewritten text and one change per matching line
/// * `Err` - If a declaration line has no quoted version, the version does not
///   parse, or the bump level is unknown
pub fn bump_contents(contents: &str, level: &str) -> Result<(String, Vec<VersionChange>)> {
    let mut changes = Vec::new();

    let lines: Vec<String> = contents
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            if !line.contains(VERSION_MARKER) {
                return Ok(line.to_string());
            }

            let (rewritten, previous, current) = rewrite_line(line, index + 1, level)?;
            changes.push(VersionChange {
                line: index + 1,
                previous,
                current,
            });
            Ok(rewritten)
        })
        .collect::<Result<_>>()?;

    Ok((lines.join("\n"), changes))
}

fn rewrite_line(line: &str, line_number: usize, level: &str) -> Result<(String, Version, Version)> {
    let mut segments = line.splitn(3, QUOTE);
    let head = segments.next().unwrap_or_default();
    let quoted = segments.next().ok_or_else(|| {
        BumpError::parse(format!(
            "No quoted version found on line {}: '{}'",
            line_number, line
        ))
    })?;
    let tail = segments.next();

    ui::display_current_version(quoted);

    // Parse before checking the level so a broken file is reported first.
    let previous = Version::parse(quoted)?;
    let current = previous.bump_named(level)?;

    ui::display_new_version(&current);

    let mut rewritten = format!("{}{}{}", head, QUOTE, current);
    if let Some(tail) = tail {
        rewritten.push(QUOTE);
        rewritten.push_str(tail);
    }

    Ok((rewritten, previous, current))
}

/// Reads `metadata.rb` under `cookbook`, bumps its version and writes it back.
///
/// The file is always rewritten in full, even when no line matched.
///
/// # Arguments
/// * `cookbook` - Directory containing `metadata.rb`
/// * `level` - Bump level name (`patch`, `minor` or `major`)
///
/// # Returns
/// * `Ok(Version)` - The new version of the last matching line, or `0.0.0` if none matched
/// * `Err` - On read/write failure or any error from [`bump_contents`]
#[instrument(skip_all, fields(cookbook = %cookbook.display(), level = %level))]
pub fn bump_metadata(cookbook: &Path, level: &str) -> Result<Version> {
    let path = metadata_path(cookbook);
    let contents = fs::read_to_string(&path).map_err(|e| BumpError::io(&path, e))?;

    let (rewritten, changes) = bump_contents(&contents, level)?;

    fs::write(&path, rewritten).map_err(|e| BumpError::io(&path, e))?;
    debug!(path = %path.display(), changes = changes.len(), "rewrote metadata");

    Ok(changes
        .last()
        .map(|change| change.current)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA: &str = "name 'apache2'\nmaintainer 'Ops'\n  version '1.0.0'\ndepends 'apt'\n";

    #[test]
    fn test_bump_contents_minor() {
        let (text, changes) = bump_contents(METADATA, "minor").unwrap();
        assert_eq!(
            text,
            "name 'apache2'\nmaintainer 'Ops'\n  version '1.1.0'\ndepends 'apt'\n"
        );
        assert_eq!(
            changes,
            vec![VersionChange {
                line: 3,
                previous: Version::new(1, 0, 0),
                current: Version::new(1, 1, 0),
            }]
        );
    }

    #[test]
    fn test_bump_contents_keeps_text_after_quote() {
        let (text, _) = bump_contents("version '2.3.4' # pinned", "patch").unwrap();
        assert_eq!(text, "version '2.3.5' # pinned");
    }

    #[test]
    fn test_bump_contents_no_match() {
        let input = "name 'apt'\r\ndepends 'x'\r\n";
        let (text, changes) = bump_contents(input, "patch").unwrap();
        assert_eq!(text, input);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_bump_contents_multiple_matches() {
        let input = "version '1.0.0'\n# version '3.4.5'\n";
        let (text, changes) = bump_contents(input, "major").unwrap();
        assert_eq!(text, "version '2.0.0'\n# version '4.0.0'\n");
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[1].current, Version::new(4, 0, 0));
    }

    #[test]
    fn test_bump_contents_unquoted_version_line() {
        let err = bump_contents("name 'x'\nversion 1.0.0\n", "patch").unwrap_err();
        assert!(matches!(err, BumpError::Parse(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_bump_contents_bad_version() {
        let err = bump_contents("version '1.0'", "patch").unwrap_err();
        assert!(matches!(err, BumpError::Parse(_)));
    }

    #[test]
    fn test_bump_contents_parse_error_wins_over_level_error() {
        let err = bump_contents("version 'a.b.c'", "huge").unwrap_err();
        assert!(matches!(err, BumpError::Parse(_)));
    }

    #[test]
    fn test_bump_contents_unknown_level() {
        let err = bump_contents("version '1.0.0'", "huge").unwrap_err();
        assert!(matches!(err, BumpError::UnknownBumpLevel(ref l) if l == "huge"));
    }

    #[test]
    fn test_bump_contents_unknown_level_without_match() {
        let (text, changes) = bump_contents("name 'x'", "huge").unwrap();
        assert_eq!(text, "name 'x'");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_metadata_path() {
        assert_eq!(
            metadata_path(Path::new("cookbooks/apt")),
            Path::new("cookbooks/apt").join("metadata.rb")
        );
    }
}
