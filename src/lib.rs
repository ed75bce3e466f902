//! Themeshift - CLI tool for migrating hardcoded theme colors to shared
//! palette constants.
//!
//! This library provides the core functionality for themeshift, including:
//! - Ordered substitution rule tables (built-in and configured)
//! - Conditional import insertion after the last existing import line
//! - The read-transform-write-back file pipeline
//! - Recursive source file enumeration
//!
//! # Example
//!
//! ```no_run
//! use themeshift_cli::config::load_merged_config;
//! use themeshift_cli::process::run_pass;
//! use themeshift_cli::rules::{Pass, effective_rules};
//! use std::path::Path;
//!
//! let root = Path::new("/work/my_app");
//! let config = load_merged_config(root).unwrap();
//! let rules = effective_rules(Pass::Colors, &config).unwrap();
//!
//! let summary = run_pass(&root.join("lib/features"), "dart", &rules, None, false).unwrap();
//! println!("Updated {} files", summary.updated);
//! ```

pub mod config;
pub mod error;
pub mod imports;
pub mod process;
pub mod rules;
pub mod walk;

pub use error::{Result, ShiftError};
