use crate::config::parser::parse_config_file;
use crate::config::types::{ExtraRuleWithSource, LoadedConfig, MergedConfig};
use crate::error::{Result, ShiftError};
use std::path::{Path, PathBuf};

/// Name of the config file, both in the project root and the home directory.
pub const CONFIG_FILE_NAME: &str = ".themeshift.toml";

/// Discover and load config files for a run rooted at `root`.
///
/// Lookup order:
/// 1. `<root>/.themeshift.toml`
/// 2. `~/.themeshift.toml`
///
/// Returns configs in that order (most specific first). Either or both may
/// be absent; an empty Vec means defaults apply everywhere.
pub fn discover_configs(root: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();

	let project_path = root.join(CONFIG_FILE_NAME);
	if project_path.exists() {
		let config = parse_config_file(&project_path)?;
		configs.push(LoadedConfig {
			config,
			path: project_path,
		});
	}

	// The user config may coincide with the project config when the scan
	// root is the home directory itself.
	let user_path = user_config_path()?;
	if user_path.exists() && !configs.iter().any(|c| c.path == user_path) {
		let config = parse_config_file(&user_path)?;
		configs.push(LoadedConfig {
			config,
			path: user_path,
		});
	}

	Ok(configs)
}

/// Merge loaded configs into effective settings.
///
/// Scalar settings are first-found wins in discovery order. Extra rules are
/// appended in discovery order, each tagged with its source config path.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		if merged.features_dir.is_none() {
			merged.features_dir = loaded.config.features_dir.clone();
		}
		if merged.extension.is_none() {
			merged.extension = loaded.config.extension.clone();
		}
		if let Some(ref import) = loaded.config.import {
			if merged.namespace.is_none() {
				merged.namespace = import.namespace.clone();
			}
			if merged.import_line.is_none() {
				merged.import_line = import.line.clone();
			}
		}

		for rule in &loaded.config.colors {
			merged.colors.push(ExtraRuleWithSource {
				rule: rule.clone(),
				source: loaded.path.clone(),
			});
		}
		for rule in &loaded.config.shades {
			merged.shades.push(ExtraRuleWithSource {
				rule: rule.clone(),
				source: loaded.path.clone(),
			});
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs for a root.
pub fn load_merged_config(root: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(root)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(ShiftError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
