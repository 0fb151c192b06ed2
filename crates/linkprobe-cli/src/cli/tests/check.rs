//! Tests for the check subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_check_single() {
    match parse(&["linkprobe", "check", "https://example.com/"]) {
        CliCommand::Check { urls, json, source } => {
            assert_eq!(urls, vec!["https://example.com/".to_string()]);
            assert!(!json);
            assert!(source.is_none());
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_many_json_source() {
    match parse(&[
        "linkprobe",
        "check",
        "https://a.example/",
        "https://b.example/",
        "--json",
        "--source",
        "page:42",
    ]) {
        CliCommand::Check { urls, json, source } => {
            assert_eq!(urls.len(), 2);
            assert!(json);
            assert_eq!(source.as_deref(), Some("page:42"));
        }
        _ => panic!("expected Check with --json"),
    }
}

#[test]
fn cli_parse_check_requires_url() {
    assert!(Cli::try_parse_from(["linkprobe", "check"]).is_err());
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from([
        "linkprobe",
        "check",
        "--config",
        "/tmp/lp.toml",
        "https://example.com/",
    ])
    .unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/lp.toml"))
    );
}
