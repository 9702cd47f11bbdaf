//! Key/value properties file loading.
//!
//! Implements the standard Java-style `.properties` line format: `#`/`!`
//! comment lines, backslash line continuation, `=`/`:`/whitespace key
//! separators and backslash escape sequences including `\uXXXX`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConvertError, Result};

/// Parses properties text into a key/value mapping.
///
/// Unparseable lines are ignored per the format's lenient convention; the
/// only hard failure is a malformed `\uXXXX` escape. Later occurrences of a
/// duplicate key win. The `path` is only used for error reporting.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use props2json::properties::parse;
///
/// let map = parse("greeting=Hello\n# a comment\nfarewell: Bye\n", Path::new("a.properties")).unwrap();
/// assert_eq!(map.get("greeting").map(String::as_str), Some("Hello"));
/// assert_eq!(map.get("farewell").map(String::as_str), Some("Bye"));
/// ```
pub fn parse(text: &str, path: &Path) -> Result<BTreeMap<String, String>> {
    let mut entries = BTreeMap::new();

    for logical in logical_lines(text) {
        let line = logical.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let (raw_key, raw_value) = split_key_value(line);
        let key = unescape(raw_key, path)?;
        let value = unescape(raw_value, path)?;
        entries.insert(key, value);
    }

    Ok(entries)
}

/// Joins continuation lines into logical lines.
///
/// A natural line ending in an odd number of backslashes continues onto the
/// next natural line; the backslash and the next line's leading whitespace
/// are dropped. Comment lines are never continued.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;

    for natural in text.lines() {
        match pending.take() {
            Some(mut joined) => {
                joined.push_str(natural.trim_start());
                if ends_with_odd_backslashes(&joined) {
                    joined.pop();
                    pending = Some(joined);
                } else {
                    lines.push(joined);
                }
            }
            None => {
                let trimmed = natural.trim_start();
                if trimmed.starts_with('#') || trimmed.starts_with('!') {
                    lines.push(natural.to_string());
                } else if ends_with_odd_backslashes(natural) {
                    let mut joined = natural.to_string();
                    joined.pop();
                    pending = Some(joined);
                } else {
                    lines.push(natural.to_string());
                }
            }
        }
    }

    // trailing continuation with no following line
    if let Some(joined) = pending {
        lines.push(joined);
    }

    lines
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Splits a logical line into raw (still escaped) key and value parts.
///
/// The key ends at the first unescaped `=`, `:` or whitespace character; a
/// whitespace separator may additionally absorb one `=` or `:` plus more
/// whitespace. A line with no separator is a key with an empty value.
fn split_key_value(line: &str) -> (&str, &str) {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut escaped = false;
    let mut sep_start = None;

    for &(i, c) in &chars {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\u{c}' => {
                sep_start = Some((i, c));
                break;
            }
            _ => {}
        }
    }

    let Some((key_end, sep)) = sep_start else {
        return (line, "");
    };

    let mut rest = &line[key_end + sep.len_utf8()..];
    rest = rest.trim_start_matches([' ', '\t', '\u{c}']);
    if sep != '=' && sep != ':' {
        // whitespace separator: one explicit separator char may still follow
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped.trim_start_matches([' ', '\t', '\u{c}']);
        }
    }

    (&line[..key_end], rest)
}

/// Resolves backslash escapes in a raw key or value.
///
/// `\t` `\n` `\r` `\f` `\\` and `\uXXXX` are recognized; any other escaped
/// character stands for itself; a lone trailing backslash is dropped. A
/// short or non-hex `\uXXXX` sequence is a parse error.
fn unescape(raw: &str, path: &Path) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = if hex.len() == 4 {
                    u32::from_str_radix(&hex, 16).ok()
                } else {
                    None
                };
                match code.and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        return Err(ConvertError::ParseError {
                            file: path.to_path_buf(),
                            reason: format!("malformed \\u escape: \\u{hex}"),
                        })
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}
