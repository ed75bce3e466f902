use crate::error::Result;
use crate::rules::table::{RuleSet, RuleSource};

/// Built-in color-literal replacements, in application order.
///
/// Hex constructors first, then named Flutter colors. The grey rule folds
/// the `[600]`/`[700]` bracket indices into the same muted constant.
const COLOR_RULES: &[(&str, &str)] = &[
	// Common hardcoded hex colors
	(r"Color\(0xFFFF6B35\)", "AppColors.primaryColor"),
	(r"Color\(0xFFD4AF37\)", "AppColors.primaryColor"),
	(r"Color\(0xFFD4A05A\)", "AppColors.primaryColor"),
	// Flutter named colors
	(r"Colors\.blue(?:Accent)?", "AppColors.primaryColor"),
	(r"Colors\.purple", "AppColors.primaryColor"),
	(r"Colors\.pink", "AppColors.accentGold"),
	(r"Colors\.orange(?:Accent)?", "AppColors.warningColor"),
	(r"Colors\.yellow", "AppColors.warningColor"),
	(r"Colors\.red(?:Accent)?", "AppColors.errorColor"),
	(r"Colors\.green", "AppColors.successColor"),
	(r"Colors\.grey(?:\[(?:600|700)\])?", "AppColors.mutedColor"),
	(r"Colors\.teal", "AppColors.accentGold"),
];

/// Compile the built-in color-literal rule set.
pub fn builtin_color_rules() -> Result<RuleSet> {
	RuleSet::compile(COLOR_RULES, RuleSource::Builtin)
}
