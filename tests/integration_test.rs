//! Integration tests for props2json.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use props2json::converter::{collect_strings_files, convert_file, write_output, ConvertOptions};

/// Writes a properties file into a test directory
fn create_properties_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A localization directory with base and translated string files
fn setup_localization_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    create_properties_file(
        temp_dir.path(),
        "energy-skate-park-strings.properties",
        "energy.total=Total Energy\nenergy.kinetic=Kinetic Energy\ncontrols.reset=Reset\n",
    );
    create_properties_file(
        temp_dir.path(),
        "energy-skate-park-strings_fr.properties",
        "energy.total=\\u00c9nergie totale\nenergy.kinetic=\\u00c9nergie cin\\u00e9tique\ncontrols.reset=R\\u00e9initialiser\n",
    );
    create_properties_file(
        temp_dir.path(),
        "energy-skate-park-strings_zh_CN.properties",
        "energy.total=\\u603b\\u80fd\\u91cf\n",
    );

    // files the converter must skip
    create_properties_file(temp_dir.path(), "build.properties", "version=1.0\n");
    create_properties_file(temp_dir.path(), "readme.txt", "not properties");

    temp_dir
}

/// Converts one directory into another, fail-fast, mirroring the binary
fn convert_directory(
    source: &Path,
    dest: &Path,
    filter: Option<&str>,
) -> props2json::Result<Vec<PathBuf>> {
    let options = ConvertOptions::new().with_filter(filter.map(str::to_string));
    let mut written = Vec::new();
    for path in collect_strings_files(source)? {
        let conversion = convert_file(&path, &options)?;
        written.push(write_output(dest, &conversion)?);
    }
    Ok(written)
}

mod locale_tests {
    use props2json::locale::{locale_tag, output_name};

    #[test]
    fn test_locale_derivation_table() {
        assert_eq!(locale_tag("foo-strings.properties").unwrap(), "en");
        assert_eq!(locale_tag("foo-strings_fr.properties").unwrap(), "fr");
        assert_eq!(locale_tag("foo-strings_zh_CN.properties").unwrap(), "zh_CN");
    }

    #[test]
    fn test_output_filename_derivation() {
        assert_eq!(
            output_name("energy-skate-park-strings_fr.properties").unwrap(),
            "energy-skate-park-strings_fr.json"
        );
        assert_eq!(
            output_name("energy-skate-park-strings.properties").unwrap(),
            "energy-skate-park-strings_en.json"
        );
    }

    #[test]
    fn test_malformed_filename_is_an_error() {
        assert!(locale_tag("foo-strings_fr").is_err());
        assert!(locale_tag("foo-strings_.properties").is_err());
    }
}

mod filter_tests {
    use props2json::KeyFilter;
    use std::collections::BTreeMap;

    fn sample_map() -> BTreeMap<String, String> {
        [
            ("energy.total", "Total"),
            ("energy.kinetic", "Kinetic"),
            ("controls.reset", "Reset"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_absent_filter_keeps_key_set() {
        let filter = KeyFilter::new(None);
        let input = sample_map();
        let output = filter.apply(input.clone());
        assert_eq!(output, input);
    }

    #[test]
    fn test_filter_selects_exactly_matching_keys() {
        let filter = KeyFilter::new(Some("energy".to_string()));
        let output = filter.apply(sample_map());
        let keys: Vec<&str> = output.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["energy.kinetic", "energy.total"]);
    }

    #[test]
    fn test_filter_case_sensitivity() {
        let filter = KeyFilter::new(Some("Energy".to_string()));
        assert!(filter.apply(sample_map()).is_empty());
    }
}

mod serialization_tests {
    use props2json::to_json;
    use std::collections::BTreeMap;

    #[test]
    fn test_empty_mapping_is_exactly_braces() {
        assert_eq!(to_json(&BTreeMap::new()), "{}");
    }

    #[test]
    fn test_emitted_text_round_trips() {
        let map: BTreeMap<String, String> = [
            ("plain", "value"),
            ("quoted", "a \"b\" c"),
            ("multiline", "one\ntwo"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let parsed: serde_json::Value = serde_json::from_str(&to_json(&map)).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), map.len());
        for (key, value) in &map {
            assert_eq!(object[key].as_str().unwrap(), value);
        }
    }

    #[test]
    fn test_one_pair_per_line_without_trailing_comma() {
        let map: BTreeMap<String, String> = [("a", "1"), ("b", "2"), ("c", "3")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let json = to_json(&map);
        assert_eq!(json.lines().count(), 5); // braces + three pairs
        assert!(!json.contains(",\n}"));
        assert!(json.contains("    \"a\": \"1\",\n"));
    }
}

mod conversion_tests {
    use super::*;

    #[test]
    fn test_keys_preserved_without_filter() {
        let temp_dir = setup_localization_directory();
        let path = temp_dir.path().join("energy-skate-park-strings.properties");

        let conversion = convert_file(&path, &ConvertOptions::new()).unwrap();
        assert_eq!(conversion.entries_read, 3);
        assert_eq!(conversion.entries_kept, 3);

        let parsed: serde_json::Value = serde_json::from_str(&conversion.json).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["controls.reset"], "Reset");
    }

    #[test]
    fn test_filter_restricts_converted_keys() {
        let temp_dir = setup_localization_directory();
        let path = temp_dir.path().join("energy-skate-park-strings.properties");

        let options = ConvertOptions::new().with_filter(Some("energy".to_string()));
        let conversion = convert_file(&path, &options).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&conversion.json).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("energy.total"));
        assert!(object.contains_key("energy.kinetic"));
        assert!(!object.contains_key("controls.reset"));
    }

    #[test]
    fn test_unicode_escapes_decoded() {
        let temp_dir = setup_localization_directory();
        let path = temp_dir
            .path()
            .join("energy-skate-park-strings_fr.properties");

        let conversion = convert_file(&path, &ConvertOptions::new()).unwrap();
        assert_eq!(conversion.locale, "fr");

        let parsed: serde_json::Value = serde_json::from_str(&conversion.json).unwrap();
        assert_eq!(parsed["energy.total"], "Énergie totale");
    }
}

mod binary_tests {
    use super::*;
    use std::process::Command;

    fn props2json() -> Command {
        Command::new(env!("CARGO_BIN_EXE_props2json"))
    }

    #[test]
    fn test_run_echoes_json_on_stdout() {
        let source = TempDir::new().unwrap();
        create_properties_file(source.path(), "a-strings.properties", "greeting=Bonjour\n");
        let dest = TempDir::new().unwrap();

        let output = props2json()
            .arg(source.path())
            .arg(dest.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("{\n    \"greeting\": \"Bonjour\"\n}"));
        assert!(dest.path().join("a-strings_en.json").exists());
    }

    #[test]
    fn test_verbose_lines_on_stdout() {
        let source = TempDir::new().unwrap();
        create_properties_file(source.path(), "a-strings_fr.properties", "greeting=Bonjour\n");
        let dest = TempDir::new().unwrap();

        let output = props2json()
            .arg(source.path())
            .arg(dest.path())
            .arg("--verbose")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("a-strings_fr.json"));
        assert!(stdout.contains("[fr]"));
    }

    #[test]
    fn test_too_few_arguments_prints_usage_and_exits_1() {
        let output = props2json().arg("only-source").output().unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Usage"));
    }

    #[test]
    fn test_missing_source_directory_fails() {
        let dest = TempDir::new().unwrap();

        let output = props2json()
            .arg("/no/such/source")
            .arg(dest.path())
            .output()
            .unwrap();

        assert!(!output.status.success());
        assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
    }
}

mod end_to_end_tests {
    use super::*;

    #[test]
    fn test_full_run_without_filter() {
        let source = TempDir::new().unwrap();
        create_properties_file(
            source.path(),
            "a-strings.properties",
            "greeting=Hello \"World\"\n",
        );
        create_properties_file(source.path(), "a-strings_fr.properties", "greeting=Bonjour\n");

        let dest = TempDir::new().unwrap();
        let written = convert_directory(source.path(), dest.path(), None).unwrap();
        assert_eq!(written.len(), 2);

        let en = fs::read_to_string(dest.path().join("a-strings_en.json")).unwrap();
        assert_eq!(en, "{\n    \"greeting\": \"Hello \\\"World\\\"\"\n}");

        let fr = fs::read_to_string(dest.path().join("a-strings_fr.json")).unwrap();
        assert_eq!(fr, "{\n    \"greeting\": \"Bonjour\"\n}");
    }

    #[test]
    fn test_full_run_writes_one_output_per_locale() {
        let source = setup_localization_directory();
        let dest = TempDir::new().unwrap();

        let written = convert_directory(source.path(), dest.path(), None).unwrap();
        assert_eq!(written.len(), 3);

        assert!(dest.path().join("energy-skate-park-strings_en.json").exists());
        assert!(dest.path().join("energy-skate-park-strings_fr.json").exists());
        assert!(dest
            .path()
            .join("energy-skate-park-strings_zh_CN.json")
            .exists());
        // the non-strings properties file is skipped
        assert!(!dest.path().join("build_en.json").exists());
    }

    #[test]
    fn test_filter_emptying_a_file_writes_empty_object() {
        let source = TempDir::new().unwrap();
        create_properties_file(source.path(), "a-strings.properties", "greeting=Hello\n");

        let dest = TempDir::new().unwrap();
        convert_directory(source.path(), dest.path(), Some("nomatch")).unwrap();

        let text = fs::read_to_string(dest.path().join("a-strings_en.json")).unwrap();
        assert_eq!(text, "{}");
    }

    #[test]
    fn test_missing_source_fails_before_writing() {
        let dest = TempDir::new().unwrap();
        let missing = dest.path().join("does-not-exist");

        let result = convert_directory(&missing, dest.path(), None);
        assert!(result.is_err());
        assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
    }
}
