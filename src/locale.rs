//! Locale tag and output filename derivation.
//!
//! Localized string files follow the `<project>-strings_<locale>.properties`
//! naming convention; the base-language file carries no locale segment at
//! all (`<project>-strings.properties`).

use crate::error::{ConvertError, Result};

/// Marker substring identifying localized string files
pub const STRINGS_MARKER: &str = "-strings";

/// Extension of input properties files
pub const PROPERTIES_SUFFIX: &str = ".properties";

/// Locale tag assumed when the filename carries no locale segment
pub const DEFAULT_LOCALE: &str = "en";

/// Returns true if `name` looks like a localized string properties file.
pub fn is_strings_file(name: &str) -> bool {
    name.ends_with(PROPERTIES_SUFFIX) && name.contains(STRINGS_MARKER)
}

/// Derives the locale tag from a properties filename.
///
/// No underscore means the base language (`en`). Otherwise the tag is the
/// text between the first underscore and the first period after it, so
/// `foo-strings_zh_CN.properties` yields `zh_CN`. An underscore without a
/// following period (or with nothing between them) is a malformed name.
///
/// # Examples
/// ```
/// use props2json::locale::locale_tag;
///
/// assert_eq!(locale_tag("foo-strings.properties").unwrap(), "en");
/// assert_eq!(locale_tag("foo-strings_fr.properties").unwrap(), "fr");
/// assert_eq!(locale_tag("foo-strings_zh_CN.properties").unwrap(), "zh_CN");
/// ```
pub fn locale_tag(name: &str) -> Result<String> {
    let Some(underscore) = name.find('_') else {
        return Ok(DEFAULT_LOCALE.to_string());
    };

    let tail = &name[underscore + 1..];
    match tail.find('.') {
        Some(period) if period > 0 => Ok(tail[..period].to_string()),
        _ => Err(ConvertError::MalformedFilename {
            file: name.to_string(),
        }),
    }
}

/// Derives the output JSON filename for an input properties filename.
///
/// The project prefix is everything before the `-strings` marker; the output
/// is `<prefix>-strings_<locale>.json`, so the base-language file gains an
/// explicit `_en` segment.
pub fn output_name(name: &str) -> Result<String> {
    let Some(marker) = name.find(STRINGS_MARKER) else {
        return Err(ConvertError::MalformedFilename {
            file: name.to_string(),
        });
    };

    let prefix = &name[..marker];
    let tag = locale_tag(name)?;
    Ok(format!("{prefix}{STRINGS_MARKER}_{tag}.json"))
}
