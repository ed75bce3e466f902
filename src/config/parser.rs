use crate::config::types::Config;
use crate::error::{Result, ShiftError};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| ShiftError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| ShiftError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed config
	config.validate()?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let content = "";
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(config.features_dir.is_none());
		assert!(config.extension.is_none());
		assert!(config.import.is_none());
		assert!(config.colors.is_empty());
		assert!(config.shades.is_empty());
	}

	#[test]
	fn test_parse_basic_config() {
		let content = r#"
features-dir = "lib/src"
extension = "dart"

[import]
namespace = "Palette"
line = "import 'package:app/palette.dart';"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.features_dir, Some("lib/src".to_string()));
		assert_eq!(config.extension, Some("dart".to_string()));
		let import = config.import.unwrap();
		assert_eq!(import.namespace, Some("Palette".to_string()));
		assert_eq!(
			import.line,
			Some("import 'package:app/palette.dart';".to_string())
		);
	}

	#[test]
	fn test_parse_extra_rules_array_of_tables() {
		let content = r#"
[[colors]]
pattern = 'Colors\.cyan'
replacement = "AppColors.infoColor"

[[shades]]
pattern = 'AppColors\.(\w+)\.shade400'
replacement = "AppColors.$1.withOpacity(0.5)"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.colors.len(), 1);
		assert_eq!(config.colors[0].pattern, r"Colors\.cyan");
		assert_eq!(config.colors[0].replacement, "AppColors.infoColor");

		assert_eq!(config.shades.len(), 1);
		assert_eq!(config.shades[0].replacement, "AppColors.$1.withOpacity(0.5)");
	}

	#[test]
	fn test_parse_extra_rules_inline_tables() {
		let content = r#"
colors = [
    { pattern = 'Colors\.cyan', replacement = "AppColors.infoColor" },
    { pattern = 'Colors\.indigo', replacement = "AppColors.primaryColor" },
]
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.colors.len(), 2);
	}

	#[test]
	fn test_invalid_regex_rejected() {
		let content = r#"
[[colors]]
pattern = "[invalid"
replacement = "x"
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);

		assert!(result.is_err());
		match result.unwrap_err() {
			ShiftError::InvalidRegex { pattern, .. } => {
				assert_eq!(pattern, "[invalid");
			}
			_ => panic!("Expected InvalidRegex error"),
		}
	}

	#[test]
	fn test_empty_pattern_rejected() {
		let content = r#"
[[shades]]
pattern = ""
replacement = "x"
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);
		assert!(matches!(result, Err(ShiftError::EmptyPattern { .. })));
	}

	#[test]
	fn test_invalid_toml_rejected() {
		let content = "colors = [[[";
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);
		assert!(matches!(result, Err(ShiftError::ConfigParseError { .. })));
	}
}
