// tests/metadata_test.rs
use cookbook_bump::domain::Version;
use cookbook_bump::metadata::{bump_metadata, METADATA_FILE};
use cookbook_bump::BumpError;
use std::fs;
use tempfile::TempDir;

const METADATA: &str = "\
name             'apache2'
maintainer       'Example Ops'
license          'Apache-2.0'
description      'Installs/Configures apache2'
  version '1.0.0'

depends 'apt', '>= 2.0'
";

fn cookbook_with(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(METADATA_FILE), contents).unwrap();
    dir
}

fn read_metadata(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join(METADATA_FILE)).unwrap()
}

#[test]
fn test_minor_bump_rewrites_only_version_line() {
    let dir = cookbook_with(METADATA);

    let version = bump_metadata(dir.path(), "minor").unwrap();
    assert_eq!(version, Version::new(1, 1, 0));

    let rewritten = read_metadata(&dir);
    assert_eq!(rewritten, METADATA.replace("'1.0.0'", "'1.1.0'"));

    let before: Vec<&str> = METADATA.split('\n').collect();
    let after: Vec<&str> = rewritten.split('\n').collect();
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(&after) {
        if old.contains("version") {
            assert_eq!(*new, "  version '1.1.0'");
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_patch_and_major_bumps() {
    let dir = cookbook_with("version '0.9.9'\n");
    assert_eq!(
        bump_metadata(dir.path(), "patch").unwrap(),
        Version::new(0, 9, 10)
    );
    assert_eq!(
        bump_metadata(dir.path(), "major").unwrap(),
        Version::new(1, 0, 0)
    );
    assert_eq!(read_metadata(&dir), "version '1.0.0'\n");
}

#[test]
fn test_no_version_line_returns_zero_version() {
    let contents = "name 'apt'\ndepends 'build-essential'";
    let dir = cookbook_with(contents);

    let version = bump_metadata(dir.path(), "patch").unwrap();
    assert_eq!(version.to_string(), "0.0.0");
    assert_eq!(read_metadata(&dir), contents);
}

#[test]
fn test_multiple_version_lines_last_one_wins() {
    let dir = cookbook_with("# bump the version '0.1.0'\nversion '1.2.3'\n");

    let version = bump_metadata(dir.path(), "patch").unwrap();
    assert_eq!(version, Version::new(1, 2, 4));
    assert_eq!(
        read_metadata(&dir),
        "# bump the version '0.1.1'\nversion '1.2.4'\n"
    );
}

#[test]
fn test_invalid_version_leaves_file_untouched() {
    let contents = "version '1.2'\n";
    let dir = cookbook_with(contents);

    let err = bump_metadata(dir.path(), "patch").unwrap_err();
    assert!(matches!(err, BumpError::Parse(_)));
    assert_eq!(read_metadata(&dir), contents);
}

#[test]
fn test_unknown_bump_level() {
    let dir = cookbook_with(METADATA);

    let err = bump_metadata(dir.path(), "mega").unwrap_err();
    assert_eq!(err.to_string(), "Bump level 'mega' unknown");
    assert_eq!(read_metadata(&dir), METADATA);
}

#[test]
fn test_missing_metadata_file_is_io_error() {
    let dir = TempDir::new().unwrap();

    let err = bump_metadata(dir.path(), "patch").unwrap_err();
    assert!(matches!(err, BumpError::Io { .. }));
    assert!(err.to_string().contains(METADATA_FILE));
}

#[test]
fn test_patch_overflow_is_parse_error() {
    let contents = "version '0.0.18446744073709551615'\n";
    let dir = cookbook_with(contents);

    let err = bump_metadata(dir.path(), "patch").unwrap_err();
    assert!(matches!(err, BumpError::Parse(_)));
    assert_eq!(read_metadata(&dir), contents);

    let version = bump_metadata(dir.path(), "minor").unwrap();
    assert_eq!(version, Version::new(0, 1, 0));
}
