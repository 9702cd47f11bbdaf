//! Run statistics and formatting helpers.

use colored::Colorize;
use std::time::{Duration, Instant};

/// Counters for one conversion run
#[derive(Debug)]
pub struct Statistics {
    /// Number of discovered input files
    pub total_files: usize,
    /// Files converted and written
    pub converted: usize,
    /// Entries parsed across all files
    pub entries_read: usize,
    /// Entries written after filtering
    pub entries_kept: usize,
    /// Total bytes of JSON written
    pub bytes_written: u64,
    start_time: Instant,
}

impl Statistics {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            converted: 0,
            entries_read: 0,
            entries_kept: 0,
            bytes_written: 0,
            start_time: Instant::now(),
        }
    }

    /// Records one successfully written file.
    pub fn record_file(&mut self, entries_read: usize, entries_kept: usize, bytes_written: u64) {
        self.converted += 1;
        self.entries_read += entries_read;
        self.entries_kept += entries_kept;
        self.bytes_written += bytes_written;
    }

    /// Entries dropped by the key filter.
    pub fn entries_filtered(&self) -> usize {
        self.entries_read - self.entries_kept
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Prints the end-of-run summary block.
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 Conversion summary".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} Input files:     {}",
            "📁".bright_cyan(),
            self.total_files
        );
        println!(
            "  {} Converted:       {}",
            "✅".bright_green(),
            self.converted.to_string().green()
        );
        println!(
            "  {} Entries read:    {}",
            "📥".bright_yellow(),
            self.entries_read
        );
        println!(
            "  {} Entries written: {}",
            "📤".bright_magenta(),
            self.entries_kept
        );

        if self.entries_filtered() > 0 {
            println!(
                "  {} Filtered out:    {}",
                "🔍".bright_magenta(),
                self.entries_filtered().to_string().yellow()
            );
        }

        println!(
            "  {} Output size:     {}",
            "💾".bright_white(),
            format_bytes(self.bytes_written)
        );
        println!(
            "  {} Elapsed:         {:.2}s",
            "⏱️".bright_cyan(),
            self.elapsed().as_secs_f64()
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// Formats a byte count for display.
///
/// # Examples
/// ```
/// use props2json::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }

    #[test]
    fn test_record_file_accumulates() {
        let mut stats = Statistics::new(3);
        stats.record_file(10, 7, 256);
        stats.record_file(5, 5, 128);

        assert_eq!(stats.converted, 2);
        assert_eq!(stats.entries_read, 15);
        assert_eq!(stats.entries_kept, 12);
        assert_eq!(stats.entries_filtered(), 3);
        assert_eq!(stats.bytes_written, 384);
    }
}
