use crate::error::{Result, ShiftError};
use regex::Regex;

/// Default namespace the colors pass introduces into files.
pub const DEFAULT_NAMESPACE: &str = "AppColors";

/// Default import declaration for the shared constants module.
pub const DEFAULT_IMPORT_LINE: &str =
	"import 'package:crazy_phone_pos/core/constants/app_colors.dart';";

/// Line-anchored pattern matching a single import declaration.
///
/// Trailing whitespace is `[ \t]*` rather than `\s*` so the match ends
/// before the line's newline and the insertion point stays on this line.
const IMPORT_PATTERN: &str = r#"(?m)^import ['"].*?['"];?[ \t]*$"#;

/// Import insertion policy for one run of the colors pass.
#[derive(Debug, Clone)]
pub struct ImportPolicy {
	/// Namespace whose presence triggers insertion (e.g. `AppColors`).
	pub namespace: String,

	/// The import declaration to insert, without a trailing newline.
	pub line: String,
}

impl Default for ImportPolicy {
	fn default() -> Self {
		ImportPolicy {
			namespace: DEFAULT_NAMESPACE.to_string(),
			line: DEFAULT_IMPORT_LINE.to_string(),
		}
	}
}

impl ImportPolicy {
	/// Insert the import declaration if the namespace is used and the import
	/// is not already present.
	///
	/// The declaration goes directly after the last existing import line.
	/// A file with no import lines at all gets the declaration at the very
	/// top, so the rewritten file still resolves the namespace.
	///
	/// Returns `Some(new_content)` when an insertion happened, `None` when
	/// the content already satisfies the policy.
	pub fn ensure_import(&self, content: &str) -> Result<Option<String>> {
		if !content.contains(&self.namespace) || content.contains(self.line.trim_end_matches(';')) {
			return Ok(None);
		}

		let import_re = Regex::new(IMPORT_PATTERN).map_err(|source| ShiftError::InvalidRegex {
			pattern: IMPORT_PATTERN.to_string(),
			source,
		})?;

		let updated = match import_re.find_iter(content).last() {
			Some(last_import) => {
				let insert_pos = last_import.end();
				format!(
					"{}\n{}{}",
					&content[..insert_pos],
					self.line,
					&content[insert_pos..]
				)
			}
			None => format!("{}\n{}", self.line, content),
		};

		Ok(Some(updated))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_after_last_import() {
		let policy = ImportPolicy::default();
		let content = "import 'package:flutter/material.dart';\nimport 'dart:async';\n\nfinal c = AppColors.primaryColor;\n";
		let updated = policy.ensure_import(content).unwrap().unwrap();

		let lines: Vec<&str> = updated.lines().collect();
		assert_eq!(lines[0], "import 'package:flutter/material.dart';");
		assert_eq!(lines[1], "import 'dart:async';");
		assert_eq!(lines[2], DEFAULT_IMPORT_LINE);
		assert!(updated.contains("AppColors.primaryColor"));
	}

	#[test]
	fn test_exactly_one_import_inserted() {
		let policy = ImportPolicy::default();
		let content = "import 'dart:async';\nfinal c = AppColors.errorColor;\n";
		let updated = policy.ensure_import(content).unwrap().unwrap();
		assert_eq!(updated.matches(DEFAULT_IMPORT_LINE).count(), 1);
	}

	#[test]
	fn test_no_insert_when_namespace_unused() {
		let policy = ImportPolicy::default();
		let content = "import 'dart:async';\nfinal x = 1;\n";
		assert!(policy.ensure_import(content).unwrap().is_none());
	}

	#[test]
	fn test_no_insert_when_already_imported() {
		let policy = ImportPolicy::default();
		let content = format!("{DEFAULT_IMPORT_LINE}\nfinal c = AppColors.primaryColor;\n");
		assert!(policy.ensure_import(&content).unwrap().is_none());
	}

	#[test]
	fn test_no_existing_imports_inserts_at_top() {
		let policy = ImportPolicy::default();
		let content = "final c = AppColors.primaryColor;\n";
		let updated = policy.ensure_import(content).unwrap().unwrap();
		assert!(updated.starts_with(DEFAULT_IMPORT_LINE));
		assert!(updated.ends_with("final c = AppColors.primaryColor;\n"));
	}

	#[test]
	fn test_idempotent() {
		let policy = ImportPolicy::default();
		let content = "import 'dart:async';\nfinal c = AppColors.primaryColor;\n";
		let once = policy.ensure_import(content).unwrap().unwrap();
		assert!(policy.ensure_import(&once).unwrap().is_none());
	}

	#[test]
	fn test_double_quoted_imports_recognized() {
		let policy = ImportPolicy::default();
		let content = "import \"dart:async\";\nfinal c = AppColors.primaryColor;\n";
		let updated = policy.ensure_import(content).unwrap().unwrap();
		let lines: Vec<&str> = updated.lines().collect();
		assert_eq!(lines[0], "import \"dart:async\";");
		assert_eq!(lines[1], DEFAULT_IMPORT_LINE);
	}

	#[test]
	fn test_custom_namespace_and_line() {
		let policy = ImportPolicy {
			namespace: "Palette".to_string(),
			line: "import 'package:app/palette.dart';".to_string(),
		};
		let content = "import 'dart:io';\nfinal c = Palette.primary;\n";
		let updated = policy.ensure_import(content).unwrap().unwrap();
		assert!(updated.contains("import 'package:app/palette.dart';"));
	}
}
