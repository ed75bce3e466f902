use crate::error::{Result, ShiftError};
use crate::imports::ImportPolicy;
use crate::rules::RuleSet;
use crate::walk::find_source_files;
use std::path::Path;

/// Result of processing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
	/// Content changed and was written back (or would be, under dry-run).
	Updated,

	/// No rule matched; the file was left byte-for-byte identical.
	Unchanged,
}

/// Counts for a whole pass over the tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
	/// Files enumerated under the source directory.
	pub scanned: usize,

	/// Files whose content changed.
	pub updated: usize,

	/// Files skipped because of a read or write error.
	pub failed: usize,
}

/// Apply a rule set (and optional import policy) to content.
///
/// Returns `Some(new_content)` when the content changed, `None` otherwise.
/// The import policy only runs when a rule already changed the file, matching
/// the write-back contract: untouched files never gain an import.
pub fn transform_content(
	content: &str,
	rules: &RuleSet,
	import: Option<&ImportPolicy>,
) -> Result<Option<String>> {
	let mut result = rules.apply(content);

	if result != content
		&& let Some(policy) = import
		&& let Some(with_import) = policy.ensure_import(&result)?
	{
		result = with_import;
	}

	if result == content {
		Ok(None)
	} else {
		Ok(Some(result))
	}
}

/// Process a single file: read, transform, write back only if changed.
pub fn process_file(
	path: &Path,
	rules: &RuleSet,
	import: Option<&ImportPolicy>,
	dry_run: bool,
) -> Result<FileOutcome> {
	let content = std::fs::read_to_string(path).map_err(|source| ShiftError::FileReadError {
		path: path.to_path_buf(),
		source,
	})?;

	match transform_content(&content, rules, import)? {
		Some(updated) => {
			if !dry_run {
				std::fs::write(path, updated).map_err(|source| ShiftError::FileWriteError {
					path: path.to_path_buf(),
					source,
				})?;
			}
			Ok(FileOutcome::Updated)
		}
		None => Ok(FileOutcome::Unchanged),
	}
}

/// Run a full pass over every matching file under `dir`.
///
/// Per-file errors are reported to stderr and non-fatal; the run continues
/// with the next file. Only a missing source directory aborts the pass.
pub fn run_pass(
	dir: &Path,
	extension: &str,
	rules: &RuleSet,
	import: Option<&ImportPolicy>,
	dry_run: bool,
) -> Result<Summary> {
	let files = find_source_files(dir, extension)?;
	println!("Found {} {} files under {}", files.len(), extension, dir.display());

	let mut summary = Summary {
		scanned: files.len(),
		..Default::default()
	};

	for path in &files {
		match process_file(path, rules, import, dry_run) {
			Ok(FileOutcome::Updated) => {
				if dry_run {
					println!("Would update: {}", path.display());
				} else {
					println!("✓ Updated: {}", path.display());
				}
				summary.updated += 1;
			}
			Ok(FileOutcome::Unchanged) => {}
			Err(e) => {
				eprintln!("Error processing {}: {}", path.display(), e);
				summary.failed += 1;
			}
		}
	}

	Ok(summary)
}
