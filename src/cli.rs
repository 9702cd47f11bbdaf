//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// props2json CLI arguments
#[derive(Parser, Debug)]
#[command(
    name = "props2json",
    author = "YourName <your@email.com>",
    version,
    about = "PROPERTIES TO JSON CONVERTER - converts localized .properties string files into per-locale JSON files",
    long_about = r#"
PROPERTIES TO JSON CONVERTER
============================

Converts every localized string file (*-strings*.properties) found in a
source directory into a flat JSON file, one per locale, written to the
destination directory as <project>-strings_<locale>.json.

Features:
  • Locale tags derived from filenames (foo-strings_fr.properties -> fr)
  • Optional key filtering by case-sensitive substring
  • Deterministic, sorted processing order and output
  • Dry-run mode to preview the files that would be converted
  • Colored progress and summary output

Examples:
  props2json ./localization ./strings
  props2json ./localization ./strings energy
  props2json ./localization ./strings --dry-run
  props2json ./localization ./strings --verbose
"#
)]
pub struct Args {
    /// Source directory containing *-strings*.properties files
    pub source: PathBuf,

    /// Destination directory for the generated JSON files
    pub dest: PathBuf,

    /// Only convert entries whose key contains this substring
    pub filter: Option<String>,

    /// Print per-file detail lines
    #[arg(short, long)]
    pub verbose: bool,

    /// List the files that would be converted without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
