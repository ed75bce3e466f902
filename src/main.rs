use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use themeshift_cli::config::{CONFIG_FILE_NAME, INIT_TEMPLATE, load_merged_config, user_config_path};
use themeshift_cli::process::run_pass;
use themeshift_cli::rules::{Pass, effective_rules};

#[derive(Parser)]
#[command(name = "themeshift")]
#[command(
	author,
	version,
	about = "CLI tool for migrating hardcoded theme colors to shared palette constants"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Replace hardcoded color literals with symbolic palette constants
	Colors(PassArgs),

	/// Normalize shade-variant references into opacity calls
	Shades(PassArgs),

	/// Display the effective rule tables in application order
	Rules {
		/// Limit output to one pass
		#[arg(long, value_enum)]
		pass: Option<PassName>,

		/// Project root whose config to include (defaults to the current directory)
		root: Option<PathBuf>,
	},

	/// Create a template .themeshift.toml in the current directory
	Init {
		/// Overwrite existing .themeshift.toml
		#[arg(long)]
		force: bool,
	},
}

#[derive(Args)]
struct PassArgs {
	/// Project root containing the source tree
	root: PathBuf,

	/// Subdirectory under the root to process (default "lib/features")
	#[arg(long, value_name = "SUBDIR")]
	dir: Option<String>,

	/// File extension to process, without the dot (default "dart")
	#[arg(long, value_name = "EXT")]
	ext: Option<String>,

	/// Report what would change without writing anything
	#[arg(long)]
	dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PassName {
	Colors,
	Shades,
}

impl From<PassName> for Pass {
	fn from(name: PassName) -> Self {
		match name {
			PassName::Colors => Pass::Colors,
			PassName::Shades => Pass::Shades,
		}
	}
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Colors(args) => handle_pass(Pass::Colors, &args),
		Commands::Shades(args) => handle_pass(Pass::Shades, &args),
		Commands::Rules { pass, root } => handle_rules(pass, root),
		Commands::Init { force } => handle_init(force),
	}
}

fn handle_pass(pass: Pass, args: &PassArgs) -> Result<ExitCode> {
	let config = load_merged_config(&args.root).context("Failed to load configuration")?;

	let dir = args.dir.as_deref().unwrap_or_else(|| config.features_dir());
	let ext = args.ext.as_deref().unwrap_or_else(|| config.extension());

	let rules = effective_rules(pass, &config).context("Failed to compile rules")?;

	// Only the colors pass introduces the namespace, so only it inserts imports.
	let import = match pass {
		Pass::Colors => Some(config.import_policy()),
		Pass::Shades => None,
	};

	let source_dir = args.root.join(dir);
	let summary = run_pass(&source_dir, ext, &rules, import.as_ref(), args.dry_run)
		.with_context(|| format!("Failed to run {} pass", pass.as_str()))?;

	println!();
	if args.dry_run {
		println!("✓ Complete! Would update {} files", summary.updated);
	} else {
		println!("✓ Complete! Updated {} files", summary.updated);
	}
	if summary.failed > 0 {
		println!("  ({} files skipped due to errors)", summary.failed);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rules(pass: Option<PassName>, root: Option<PathBuf>) -> Result<ExitCode> {
	let root = match root {
		Some(root) => root,
		None => std::env::current_dir().context("Failed to get current directory")?,
	};
	let config = load_merged_config(&root).context("Failed to load configuration")?;

	let passes: &[Pass] = match pass.map(Pass::from) {
		Some(Pass::Colors) => &[Pass::Colors],
		Some(Pass::Shades) => &[Pass::Shades],
		None => &[Pass::Colors, Pass::Shades],
	};

	for (i, pass) in passes.iter().enumerate() {
		if i > 0 {
			println!();
		}
		let rules = effective_rules(*pass, &config).context("Failed to compile rules")?;
		println!("# {} pass ({} rules, applied in order)", pass.as_str(), rules.rules().len());
		for (n, rule) in rules.rules().iter().enumerate() {
			println!("  {:2}. {} -> {}  [{}]", n + 1, rule.pattern, rule.replacement, rule.source);
		}
	}

	// Show user config path, as a discovery aid
	if let Ok(user_path) = user_config_path() {
		println!();
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = Path::new(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(config_path, INIT_TEMPLATE)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}
