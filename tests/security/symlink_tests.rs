//! Symlink handling in the snapshotter.
//!
//! Links are never followed into directories, so a link cycle or a link to a
//! large tree outside the root cannot blow up a snapshot.

use drop_audit::Snapshotter;
use std::fs;
use tempfile::TempDir;

#[cfg(unix)]
use std::os::unix::fs::symlink;

#[cfg(unix)]
#[test]
fn test_symlink_cycle_terminates() {
    let temp_dir = TempDir::new().unwrap();
    let sub = temp_dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("file.py"), "x").unwrap();
    symlink(temp_dir.path(), sub.join("loop")).unwrap();

    let snapshot = Snapshotter::new(temp_dir.path()).take().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.contains("sub/file.py"));
}

#[cfg(unix)]
#[test]
fn test_directory_symlink_not_followed() {
    let temp_dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    fs::write(outside.path().join("secret.py"), "x").unwrap();
    symlink(outside.path(), temp_dir.path().join("escape")).unwrap();

    let snapshot = Snapshotter::new(temp_dir.path()).take().unwrap();
    assert!(snapshot.is_empty());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_skipped() {
    let temp_dir = TempDir::new().unwrap();
    symlink(
        temp_dir.path().join("missing.py"),
        temp_dir.path().join("dangling.py"),
    )
    .unwrap();

    let snapshot = Snapshotter::new(temp_dir.path()).take().unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn test_unicode_file_names() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("日本語.py"), "x").unwrap();

    let snapshot = Snapshotter::new(temp_dir.path()).take().unwrap();
    assert!(snapshot.contains("日本語.py"));
}
