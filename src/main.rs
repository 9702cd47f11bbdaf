//! props2json - PROPERTIES TO JSON CONVERTER
//!
//! Main entrypoint.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use props2json::{
    cli::Args,
    converter::{collect_strings_files, convert_file, write_output, ConvertOptions},
    stats::Statistics,
};

fn main() -> Result<()> {
    // Missing positional arguments print usage on stdout and exit 1; every
    // other clap outcome (--help, --version, bad flags) keeps its default.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", e.render());
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    print_header(&args);

    let files = collect_strings_files(&args.source)?;

    if files.is_empty() {
        println!("{}", "⚠️ No string properties files to convert.".yellow());
        return Ok(());
    }

    println!(
        "  {} Files found: {}",
        "📋".bright_white(),
        files.len().to_string().bright_green()
    );

    if args.dry_run {
        print_dry_run(&files);
        return Ok(());
    }

    run_conversion(&args, files)
}

/// Prints the header banner.
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🌍 PROPERTIES TO JSON CONVERTER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} Source:      {:?}", "📂".bright_cyan(), args.source);
    println!("  {} Destination: {:?}", "📄".bright_green(), args.dest);

    if let Some(ref filter) = args.filter {
        println!("  {} Key filter:  {}", "🔍".bright_magenta(), filter);
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "Dry-run mode (nothing is written)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 Scanning for string files...".bright_cyan());
}

/// Prints the dry-run file listing.
fn print_dry_run(files: &[PathBuf]) {
    println!("\n{}", "📋 Files that would be converted:".bright_cyan());
    for (i, path) in files.iter().enumerate() {
        println!("  {}. {:?}", i + 1, path.file_name().unwrap_or_default());
    }
    println!(
        "\n{} {} file(s) would be converted.",
        "ℹ️".bright_blue(),
        files.len().to_string().bright_green()
    );
}

/// Converts every discovered file, one at a time in sorted order.
///
/// Any failure aborts the whole run; files are never skipped.
fn run_conversion(args: &Args, files: Vec<PathBuf>) -> Result<()> {
    let options = ConvertOptions::new().with_filter(args.filter.clone());
    let mut stats = Statistics::new(files.len());

    println!("\n{}", "⚙️ Converting...".bright_cyan());

    let pb = create_progress_bar(files.len());

    for path in &files {
        let conversion = convert_file(path, &options)?;

        // Echo the generated JSON for each file on stdout
        pb.suspend(|| {
            println!("{}", conversion.json);
            println!();
        });

        let written = write_output(&args.dest, &conversion)?;
        stats.record_file(
            conversion.entries_read,
            conversion.entries_kept,
            conversion.json.len() as u64,
        );

        if args.verbose {
            pb.suspend(|| {
                println!(
                    "  {} {:?} -> {:?} [{}] ({} of {} entries)",
                    "✓".green(),
                    path.file_name().unwrap_or_default(),
                    written.file_name().unwrap_or_default(),
                    conversion.locale,
                    conversion.entries_kept,
                    conversion.entries_read
                );
            });
        }

        pb.inc(1);
    }

    pb.finish_with_message("done");

    stats.print_summary();

    println!("\n{} Output written to {:?}\n", "✅".bright_green(), args.dest);

    Ok(())
}

/// Creates the conversion progress bar.
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}
