use crate::error::{Result, ShiftError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect files under `dir` with the given extension.
///
/// Results are sorted by path so output and processing order are stable.
/// A missing `dir` is the one fatal condition of a run.
pub fn find_source_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
	if !dir.is_dir() {
		return Err(ShiftError::SourceDirNotFound {
			path: dir.to_path_buf(),
		});
	}

	let mut files = Vec::new();
	for entry in WalkDir::new(dir) {
		let entry = entry.map_err(|source| ShiftError::WalkError {
			path: dir.to_path_buf(),
			source,
		})?;

		if entry.file_type().is_file()
			&& entry.path().extension().is_some_and(|ext| ext == extension)
		{
			files.push(entry.path().to_path_buf());
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_missing_dir_is_fatal() {
		let result = find_source_files(Path::new("/nonexistent/themeshift/dir"), "dart");
		assert!(matches!(result, Err(ShiftError::SourceDirNotFound { .. })));
	}

	#[test]
	fn test_finds_only_matching_extension() {
		let temp = tempfile::tempdir().unwrap();
		fs::write(temp.path().join("a.dart"), "x").unwrap();
		fs::write(temp.path().join("b.txt"), "x").unwrap();
		fs::create_dir(temp.path().join("nested")).unwrap();
		fs::write(temp.path().join("nested/c.dart"), "x").unwrap();

		let files = find_source_files(temp.path(), "dart").unwrap();
		assert_eq!(files.len(), 2);
		assert!(files.iter().all(|f| f.extension().unwrap() == "dart"));
	}

	#[test]
	fn test_sorted_order() {
		let temp = tempfile::tempdir().unwrap();
		fs::write(temp.path().join("z.dart"), "x").unwrap();
		fs::write(temp.path().join("a.dart"), "x").unwrap();

		let files = find_source_files(temp.path(), "dart").unwrap();
		assert!(files[0].ends_with("a.dart"));
		assert!(files[1].ends_with("z.dart"));
	}

	#[test]
	fn test_empty_tree() {
		let temp = tempfile::tempdir().unwrap();
		let files = find_source_files(temp.path(), "dart").unwrap();
		assert!(files.is_empty());
	}
}
