//! Configuration loading and parsing for themeshift.
//!
//! This module handles:
//! - TOML config file parsing
//! - Project-then-user config discovery
//! - Config merging

pub mod discover;
pub mod parser;
pub mod types;

pub use discover::{CONFIG_FILE_NAME, discover_configs, load_merged_config, merge_configs, user_config_path};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{
	Config, DEFAULT_EXTENSION, DEFAULT_FEATURES_DIR, ExtraRule, ExtraRuleWithSource, ImportConfig,
	LoadedConfig, MergedConfig,
};

/// Template written by `themeshift init`.
pub const INIT_TEMPLATE: &str = r#"# themeshift configuration
# Scalar settings fall back to built-in defaults when omitted.

# Subdirectory under the scan root to process.
features-dir = "lib/features"

# File extension to process, without the dot.
extension = "dart"

# Import insertion for the colors pass.
# [import]
# namespace = "AppColors"
# line = "import 'package:crazy_phone_pos/core/constants/app_colors.dart';"

# Extra rules append after the built-in tables, in file order.
# [[colors]]
# pattern = 'Colors\.cyan'
# replacement = "AppColors.infoColor"

# [[shades]]
# pattern = 'AppColors\.(\w+)\.shade400'
# replacement = "AppColors.$1.withOpacity(0.5)"
"#;

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_init_template_parses() {
		let config = parse_config_str(INIT_TEMPLATE, &PathBuf::from("template.toml")).unwrap();
		assert_eq!(config.features_dir, Some("lib/features".to_string()));
		assert_eq!(config.extension, Some("dart".to_string()));
	}
}
