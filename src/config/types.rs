use crate::imports::ImportPolicy;
use serde::Deserialize;
use std::path::PathBuf;

/// Relative subdirectory processed when no config overrides it.
pub const DEFAULT_FEATURES_DIR: &str = "lib/features";

/// File extension processed when no config overrides it.
pub const DEFAULT_EXTENSION: &str = "dart";

/// Top-level configuration from a `.themeshift.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Subdirectory under the scan root to process (default `lib/features`).
	#[serde(default)]
	pub features_dir: Option<String>,

	/// File extension to process, without the dot (default `dart`).
	#[serde(default)]
	pub extension: Option<String>,

	/// Import insertion overrides.
	#[serde(default)]
	pub import: Option<ImportConfig>,

	/// Extra color-literal rules, appended after the built-in table.
	#[serde(default)]
	pub colors: Vec<ExtraRule>,

	/// Extra shade-variant rules, appended after the built-in table.
	#[serde(default)]
	pub shades: Vec<ExtraRule>,
}

/// Import insertion settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImportConfig {
	/// Namespace whose presence triggers import insertion.
	pub namespace: Option<String>,

	/// The import declaration to insert.
	pub line: Option<String>,
}

/// A user-supplied substitution rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExtraRule {
	/// Regex pattern to match.
	pub pattern: String,

	/// Replacement template. May reference capture groups as `$1`.
	pub replacement: String,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Effective settings after merging all discovered configs with defaults.
///
/// Scalar settings are first-found wins in discovery order (project before
/// user); extra rules from every config are kept, tagged with their source.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// Subdirectory under the scan root, if any config set one.
	pub features_dir: Option<String>,

	/// File extension, if any config set one.
	pub extension: Option<String>,

	/// Import namespace override, if any.
	pub namespace: Option<String>,

	/// Import line override, if any.
	pub import_line: Option<String>,

	/// Extra color rules with their source config path.
	pub colors: Vec<ExtraRuleWithSource>,

	/// Extra shade rules with their source config path.
	pub shades: Vec<ExtraRuleWithSource>,
}

/// An extra rule with the config file it came from.
#[derive(Debug, Clone)]
pub struct ExtraRuleWithSource {
	/// The rule itself.
	pub rule: ExtraRule,

	/// The config file this rule came from.
	pub source: PathBuf,
}

impl MergedConfig {
	/// Effective subdirectory under the scan root.
	pub fn features_dir(&self) -> &str {
		self.features_dir.as_deref().unwrap_or(DEFAULT_FEATURES_DIR)
	}

	/// Effective file extension.
	pub fn extension(&self) -> &str {
		self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
	}

	/// Effective import policy for the colors pass.
	pub fn import_policy(&self) -> ImportPolicy {
		let defaults = ImportPolicy::default();
		ImportPolicy {
			namespace: self.namespace.clone().unwrap_or(defaults.namespace),
			line: self.import_line.clone().unwrap_or(defaults.line),
		}
	}
}

impl ExtraRule {
	/// Validate that the rule can be compiled.
	pub fn validate(&self) -> Result<(), crate::error::ShiftError> {
		if self.pattern.is_empty() {
			return Err(crate::error::ShiftError::EmptyPattern {
				replacement: self.replacement.clone(),
			});
		}

		regex::Regex::new(&self.pattern).map_err(|source| {
			crate::error::ShiftError::InvalidRegex {
				pattern: self.pattern.clone(),
				source,
			}
		})?;

		Ok(())
	}
}

impl Config {
	/// Validate all extra rules in this config.
	pub fn validate(&self) -> Result<(), crate::error::ShiftError> {
		for rule in self.colors.iter().chain(self.shades.iter()) {
			rule.validate()?;
		}
		Ok(())
	}
}
