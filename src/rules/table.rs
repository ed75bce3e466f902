use crate::error::{Result, ShiftError};
use regex::Regex;
use std::path::PathBuf;

/// Where a rule came from, for `themeshift rules` display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
	/// Part of the built-in transformation table.
	Builtin,

	/// Loaded from a config file at this path.
	Config(PathBuf),
}

impl std::fmt::Display for RuleSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RuleSource::Builtin => write!(f, "builtin"),
			RuleSource::Config(path) => write!(f, "{}", path.display()),
		}
	}
}

/// A single compiled substitution rule.
#[derive(Debug)]
pub struct Rule {
	/// Compiled pattern to match.
	pub pattern: Regex,

	/// Replacement template. May reference capture groups as `$1`.
	pub replacement: String,

	/// Where this rule was defined.
	pub source: RuleSource,
}

impl Rule {
	/// Compile a rule from a pattern string and replacement template.
	pub fn compile(pattern: &str, replacement: &str, source: RuleSource) -> Result<Self> {
		if pattern.is_empty() {
			return Err(ShiftError::EmptyPattern {
				replacement: replacement.to_string(),
			});
		}

		let pattern = Regex::new(pattern).map_err(|source| ShiftError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(Rule {
			pattern,
			replacement: replacement.to_string(),
			source,
		})
	}

	/// Apply this rule to the entire content, replacing all occurrences.
	pub fn apply(&self, content: &str) -> String {
		self.pattern
			.replace_all(content, self.replacement.as_str())
			.to_string()
	}
}

/// An ordered list of rules applied as a unit.
///
/// Order is load-bearing: later rules may act on text produced by earlier
/// rules, and catch-all rules rely on more specific rules running first.
#[derive(Debug, Default)]
pub struct RuleSet {
	rules: Vec<Rule>,
}

impl RuleSet {
	/// Compile a rule set from (pattern, replacement) pairs, preserving order.
	pub fn compile(pairs: &[(&str, &str)], source: RuleSource) -> Result<Self> {
		let rules = pairs
			.iter()
			.map(|(pattern, replacement)| Rule::compile(pattern, replacement, source.clone()))
			.collect::<Result<Vec<_>>>()?;

		Ok(RuleSet { rules })
	}

	/// Append another rule to the end of the set.
	pub fn push(&mut self, rule: Rule) {
		self.rules.push(rule);
	}

	/// The rules in application order.
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Apply every rule in order to the content.
	pub fn apply(&self, content: &str) -> String {
		let mut result = content.to_string();
		for rule in &self.rules {
			result = rule.apply(&result);
		}
		result
	}
}
