//! Substitution rule tables for themeshift.
//!
//! This module handles:
//! - Rule compilation and ordered application
//! - The built-in color-literal table
//! - The built-in shade-variant table

pub mod colors;
pub mod shades;
pub mod table;

use crate::config::MergedConfig;
use crate::error::Result;

pub use colors::builtin_color_rules;
pub use shades::{SHADE_OPACITY, builtin_shade_rules};
pub use table::{Rule, RuleSet, RuleSource};

/// Which transformation pass a rule set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
	/// Replace hardcoded color literals with symbolic constants.
	Colors,

	/// Normalize shade variants into opacity calls.
	Shades,
}

impl Pass {
	pub fn as_str(&self) -> &'static str {
		match self {
			Pass::Colors => "colors",
			Pass::Shades => "shades",
		}
	}
}

/// Build the effective rule set for a pass: built-ins first, then any
/// configured extra rules in discovery order.
pub fn effective_rules(pass: Pass, config: &MergedConfig) -> Result<RuleSet> {
	let (mut set, extras) = match pass {
		Pass::Colors => (builtin_color_rules()?, &config.colors),
		Pass::Shades => (builtin_shade_rules()?, &config.shades),
	};

	for extra in extras {
		set.push(Rule::compile(
			&extra.rule.pattern,
			&extra.rule.replacement,
			RuleSource::Config(extra.source.clone()),
		)?);
	}

	Ok(set)
}
