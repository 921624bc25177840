//! Whole-file read/write helpers for phonebook documents.
//!
//! Writes go to a sibling temporary file first and are renamed over the
//! target, so a failed save never leaves a truncated phonebook behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Reads the whole file at `path`.
pub fn read_bytes(path: &Path) -> CoreResult<Vec<u8>> {
    fs::read(path).map_err(|e| CoreError::Io(format!("{}: {e}", path.display())))
}

/// Replaces the file at `path` with `bytes`.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> CoreResult<()> {
    let tmp_path = path.with_extension("xml.tmp");
    let result = write_and_rename(&tmp_path, path, bytes);
    if result.is_err() {
        // 临时文件可能不存在，忽略清理失败
        let _ = fs::remove_file(&tmp_path);
    }
    result.map_err(|e| CoreError::Io(format!("{}: {e}", path.display())))
}

fn write_and_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp_path, path)
}

/// Display name of a phonebook file (the last path component).
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_returns_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xml");

        write_bytes(&path, b"<records/>").unwrap();
        assert_eq!(read_bytes(&path).unwrap(), b"<records/>");
        assert!(!dir.path().join("book.xml.tmp").exists());
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xml");
        fs::write(&path, b"old contents that are longer").unwrap();

        write_bytes(&path, b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_bytes(&dir.path().join("absent.xml")).unwrap_err();
        assert!(matches!(err, CoreError::Io(msg) if msg.contains("absent.xml")));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("book.xml");
        assert!(matches!(write_bytes(&path, b"x"), Err(CoreError::Io(_))));
    }

    #[test]
    fn display_name_is_last_component() {
        assert_eq!(display_name(Path::new("/home/me/friends.xml")), "friends.xml");
        assert_eq!(display_name(Path::new("friends.xml")), "friends.xml");
    }
}
