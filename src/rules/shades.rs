use crate::error::Result;
use crate::rules::table::{RuleSet, RuleSource};

/// Opacity applied for each light shade number.
///
/// Darker shades (600/700/800) collapse to the base constant instead, an
/// approximation rather than a true shade conversion.
pub const SHADE_OPACITY: &[(u16, &str)] = &[(50, "0.1"), (100, "0.15"), (200, "0.3"), (300, "0.4")];

/// Built-in shade-variant rewrites, in application order.
///
/// The `AppColors.<name>.shadeNNN` rules run first, then the amber-specific
/// shade rules, and the bare `Colors.amber` catch-all must stay last: it
/// would otherwise strip the prefix the shade rules need to see.
const SHADE_RULES: &[(&str, &str)] = &[
	(r"AppColors\.(\w+)\.shade50", "AppColors.$1.withOpacity(0.1)"),
	(r"AppColors\.(\w+)\.shade100", "AppColors.$1.withOpacity(0.15)"),
	(r"AppColors\.(\w+)\.shade200", "AppColors.$1.withOpacity(0.3)"),
	(r"AppColors\.(\w+)\.shade300", "AppColors.$1.withOpacity(0.4)"),
	(r"AppColors\.(\w+)\.shade600", "AppColors.$1"),
	(r"AppColors\.(\w+)\.shade700", "AppColors.$1"),
	(r"AppColors\.(\w+)\.shade800", "AppColors.$1"),
	(r"Colors\.amber\.shade50", "AppColors.warningColor.withOpacity(0.1)"),
	(r"Colors\.amber\.shade200", "AppColors.warningColor.withOpacity(0.3)"),
	(r"Colors\.amber\.shade800", "AppColors.warningColor"),
	(r"Colors\.amber", "AppColors.warningColor"),
];

/// Compile the built-in shade-variant rule set.
pub fn builtin_shade_rules() -> Result<RuleSet> {
	RuleSet::compile(SHADE_RULES, RuleSource::Builtin)
}
