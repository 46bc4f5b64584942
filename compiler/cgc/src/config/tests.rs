#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_full_options() {
    let config = parse_run_args(
        &args(&[
            "--input=model.json",
            "--output=out.json",
            "--scope=com.acme.",
            "--suffix=Fluent",
            "--strict",
        ]),
        None,
    )
    .unwrap();

    assert_eq!(
        config,
        DriverConfig {
            input: PathBuf::from("model.json"),
            output: PathBuf::from("out.json"),
            builder: BuilderConfig::new("com.acme.")
                .with_suffix("Fluent")
                .strict(true),
        }
    );
}

#[test]
fn test_scope_falls_back_to_env() {
    let config = parse_run_args(
        &args(&["--input=a.json", "--output=b.json"]),
        Some("org.example.".to_owned()),
    )
    .unwrap();
    assert_eq!(config.builder.scope_prefix, "org.example.");
    assert_eq!(config.builder.suffix, "Builder");
    assert!(!config.builder.strict);
}

#[test]
fn test_flag_wins_over_env() {
    let config = parse_run_args(
        &args(&["--input=a.json", "--output=b.json", "--scope=com."]),
        Some("org.".to_owned()),
    )
    .unwrap();
    assert_eq!(config.builder.scope_prefix, "com.");
}

#[test]
fn test_empty_scope_is_allowed() {
    let config =
        parse_run_args(&args(&["--input=a.json", "--output=b.json", "--scope="]), None).unwrap();
    assert_eq!(config.builder.scope_prefix, "");
}

#[test]
fn test_missing_scope() {
    let err = parse_run_args(&args(&["--input=a.json", "--output=b.json"]), None).unwrap_err();
    assert!(matches!(err, DriverError::Config(ref msg) if msg.contains("--scope")));
}

#[test]
fn test_missing_paths() {
    let err = parse_run_args(&args(&["--output=b.json", "--scope=a."]), None).unwrap_err();
    assert!(matches!(err, DriverError::Config(ref msg) if msg == "missing --input"));

    let err = parse_run_args(&args(&["--input=a.json", "--scope=a."]), None).unwrap_err();
    assert!(matches!(err, DriverError::Config(ref msg) if msg == "missing --output"));
}

#[test]
fn test_same_input_and_output_rejected() {
    let err = parse_run_args(
        &args(&["--input=model.json", "--output=model.json", "--scope=a."]),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, DriverError::Config(ref msg) if msg.contains("same file")));
}

#[test]
fn test_unknown_option() {
    let err = parse_run_args(&args(&["--verbose"]), None).unwrap_err();
    assert!(matches!(err, DriverError::Config(ref msg) if msg == "unknown option: --verbose"));
}

#[test]
fn test_empty_suffix_rejected() {
    let err = parse_run_args(
        &args(&["--input=a.json", "--output=b.json", "--scope=a.", "--suffix="]),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, DriverError::Config(_)));
}
