use std::fs;

use ofsstat::{OfsConfig, OfsError};

#[test]
fn service_id_from_default_fs() {
    let config = OfsConfig::from_toml_str(
        r#"
        [ofs]
        fs_defaultfs = "ofs://ozone1"
        "#,
    )
    .unwrap();

    assert_eq!(config.fs_defaultfs.as_deref(), Some("ofs://ozone1"));
    assert_eq!(config.resolved_service_id().unwrap().as_deref(), Some("ozone1"));
}

#[test]
fn explicit_service_id_wins() {
    let config = OfsConfig::from_toml_str(
        r#"
        [ofs]
        fs_defaultfs = "ofs://ozone1"
        service_id = "ozone-ha"
        "#,
    )
    .unwrap();

    assert_eq!(config.resolved_service_id().unwrap().as_deref(), Some("ozone-ha"));
}

#[test]
fn empty_values_mean_no_service() {
    let config = OfsConfig::from_toml_str(
        r#"
        [ofs]
        fs_defaultfs = "ofs://"
        service_id = ""
        "#,
    )
    .unwrap();

    assert_eq!(config.resolved_service_id().unwrap(), None);
}

#[test]
fn missing_table_is_default() {
    let config = OfsConfig::from_toml_str("[other]\nkey = 1\n").unwrap();
    assert_eq!(config, OfsConfig::default());
    assert_eq!(config.resolved_service_id().unwrap(), None);
}

#[test]
fn non_ofs_default_fs_is_rejected() {
    let config = OfsConfig::from_toml_str("[ofs]\nfs_defaultfs = \"hdfs://nn:8020\"\n").unwrap();
    let err = config.resolved_service_id().unwrap_err();
    assert!(matches!(err, OfsError::InvalidUri(uri) if uri == "hdfs://nn:8020"));
}

#[test]
fn invalid_toml_is_a_config_error() {
    let err = OfsConfig::from_toml_str("[ofs\nfs_defaultfs = ").unwrap_err();
    assert!(matches!(err, OfsError::Config(_)));

    let err = OfsConfig::from_toml_str("[ofs]\nfs_defaultfs = 42\n").unwrap_err();
    assert!(matches!(err, OfsError::Config(_)));
}

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ofs.toml");
    fs::write(&path, "[ofs]\nfs_defaultfs = \"ofs://ozone1\"\n").unwrap();

    let config = OfsConfig::from_file(&path).unwrap();
    assert_eq!(config.resolved_service_id().unwrap().as_deref(), Some("ozone1"));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match OfsConfig::from_file(&path) {
        Err(OfsError::Io { path: got, source }) => {
            assert_eq!(got, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}
