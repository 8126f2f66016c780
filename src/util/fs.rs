//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::Path;

/// List the file names in a directory.
///
/// Names that aren't valid UTF-8 are converted lossily. The order is whatever
/// the platform returns.
pub fn list_dir(path: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), "{}").unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();

        let mut names = list_dir(tmp.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["package.json", "src"]);
    }

    #[test]
    fn test_list_dir_missing() {
        let tmp = TempDir::new().unwrap();
        let err = list_dir(&tmp.path().join("gone")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
