use std::fs;

use clap::Parser;

use textbus_cli::{run, Args, CliError};

fn args(dir: &tempfile::TempDir, rest: &[&str]) -> Args {
    let file = dir.path().join("panel.txt");
    let mut argv = vec!["textbus", "--file", file.to_str().unwrap()];
    argv.extend_from_slice(rest);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_set_get_through_file() {
    let dir = tempfile::tempdir().unwrap();

    run(&args(&dir, &["set", "float", "a", "0.25"])).unwrap();
    run(&args(&dir, &["set", "string", "status", "ready"])).unwrap();

    assert_eq!(run(&args(&dir, &["get", "float", "a"])).unwrap(), "0.25");
    assert_eq!(
        run(&args(&dir, &["get", "string", "status"])).unwrap(),
        "ready"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("panel.txt")).unwrap(),
        "Sstatus          Sready\nSa               F0.25\n"
    );
}

#[test]
fn test_tick_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();

    assert_eq!(
        run(&args(&dir, &["tick", "--count", "2"])).unwrap(),
        "a = 1\nb = 1"
    );
    // A new process restores a from the file.
    assert_eq!(
        run(&args(&dir, &["tick"])).unwrap(),
        "a = 2\nb = 1.4142135"
    );
}

#[test]
fn test_config_selects_terminator() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bus.json");
    fs::write(&config, r#"{"terminator": "\u001e"}"#).unwrap();
    let config = config.to_str().unwrap();

    run(&args(&dir, &["--config", config, "set", "string", "note", "two\nlines"])).unwrap();
    assert_eq!(
        run(&args(&dir, &["--config", config, "get", "string", "note"])).unwrap(),
        "two\nlines"
    );

    // Without the config the newline is rejected.
    let err = run(&args(&dir, &["set", "string", "other", "two\nlines"])).unwrap_err();
    assert!(format!("{}", err).contains("terminator"));
}

#[test]
fn test_bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bus.json");
    fs::write(&config, r#"{"terminator": "S"}"#).unwrap();
    let config = config.to_str().unwrap();

    let err = run(&args(&dir, &["--config", config, "dump"])).unwrap_err();
    assert!(matches!(err, CliError::Bus(_)));

    let missing = dir.path().join("missing.json");
    let err = run(&args(&dir, &["--config", missing.to_str().unwrap(), "dump"])).unwrap_err();
    assert!(matches!(err, CliError::ConfigRead { .. }));
}

#[test]
fn test_unknown_kind_is_rejected_by_parser() {
    let result = Args::try_parse_from(["textbus", "get", "bool", "a"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_tick_count_is_rejected_by_parser() {
    let result = Args::try_parse_from(["textbus", "tick", "--count", "0"]);
    assert!(result.is_err());

    let args = Args::try_parse_from(["textbus", "tick", "--count", "1"]).unwrap();
    assert!(matches!(args.command, textbus_cli::Command::Tick { count: 1 }));
}
