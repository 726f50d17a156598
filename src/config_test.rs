use super::*;
use tempfile::tempdir;

#[test]
fn empty_file_gives_defaults() {
    let cfg = Config::parse("", Path::new("x.toml")).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.marker_name(), Some(DEFAULT_MARKER));
}

#[test]
fn parses_all_keys() {
    let text = "json = true\nmarker = \".skip\"\nexclude = [\"vendor/**\", \"*.min.js\"]\n";
    let cfg = Config::parse(text, Path::new("x.toml")).unwrap();
    assert!(cfg.json);
    assert_eq!(cfg.marker_name(), Some(".skip"));
    assert_eq!(cfg.exclude, ["vendor/**", "*.min.js"]);
}

#[test]
fn empty_marker_disables_check() {
    let cfg = Config::parse("marker = \"\"", Path::new("x.toml")).unwrap();
    assert_eq!(cfg.marker_name(), None);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = Config::parse("colour = true", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, SlocError::ConfigParse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn wrong_type_is_rejected() {
    assert!(Config::parse("json = \"yes\"", Path::new("x.toml")).is_err());
}

#[test]
fn discover_without_file_uses_defaults() {
    let dir = tempdir().unwrap();
    assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());
}

#[test]
fn discover_finds_local_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(LOCAL_CONFIG_NAME), "json = true\n").unwrap();
    assert!(Config::discover(None, dir.path()).unwrap().json);
}

#[test]
fn explicit_path_wins_over_local_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(LOCAL_CONFIG_NAME), "json = true\n").unwrap();
    let other = dir.path().join("other.toml");
    fs::write(&other, "exclude = [\"gen\"]\n").unwrap();
    let cfg = Config::discover(Some(&other), dir.path()).unwrap();
    assert!(!cfg.json);
    assert_eq!(cfg.exclude, ["gen"]);
}

#[test]
fn explicit_missing_path_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = Config::discover(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(err, SlocError::ConfigRead { .. }));
}
