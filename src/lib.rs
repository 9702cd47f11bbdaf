//! props2json - PROPERTIES TO JSON CONVERTER
//!
//! Converts localized `.properties` string files into per-locale JSON files.
//! Every `*-strings*.properties` file in a source directory becomes one
//! `<project>-strings_<locale>.json` file in the destination directory.
//!
//! # Features
//!
//! - 🌍 **Locale tagging**: the locale is derived from the filename —
//!   `foo-strings_fr.properties` becomes `fr`, the plain
//!   `foo-strings.properties` base file becomes `en`
//! - 📖 **Standard properties parsing**: comments, line continuations,
//!   `=`/`:`/whitespace separators and `\uXXXX` escapes
//! - 🔍 **Key filtering**: only emit entries whose key contains a given
//!   substring
//! - 📝 **Stable output**: sorted file order and sorted keys, so reruns are
//!   byte-identical
//! - 🧪 **Dry-run mode**: preview the files that would be converted
//! - 🎨 **Colored output**: progress bar, per-file JSON echo and a summary
//!   block
//!
//! # Examples
//!
//! ```bash
//! # Convert a whole localization directory
//! props2json ./localization ./strings
//!
//! # Only convert keys mentioning "energy"
//! props2json ./localization ./strings energy
//!
//! # See what would happen first
//! props2json ./localization ./strings --dry-run
//! ```

pub mod cli;
pub mod converter;
pub mod error;
pub mod filter;
pub mod json;
pub mod locale;
pub mod properties;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use converter::{collect_strings_files, convert_file, write_output, ConvertOptions, Conversion};
pub use error::{ConvertError, Result};
pub use filter::KeyFilter;
pub use json::to_json;
pub use locale::{locale_tag, output_name};
pub use stats::{format_bytes, Statistics};
