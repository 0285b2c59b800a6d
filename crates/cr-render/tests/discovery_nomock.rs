//! Discovery tests against the real filesystem and environment.

use cr_render::{EngineLocator, EnvProbe, LocateStrategy, RenderConfig, WellKnownPaths};
use std::io::Write;

#[test]
fn test_env_probe_finds_existing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"#!/bin/sh\n").unwrap();

    // Variable name unique to this test to avoid cross-test interference.
    std::env::set_var("CR_RENDER_TEST_ENGINE", file.path());
    let probe = EnvProbe::new(vec!["CR_RENDER_TEST_ENGINE".to_string()]);
    assert_eq!(probe.locate().as_deref(), Some(file.path()));
    std::env::remove_var("CR_RENDER_TEST_ENGINE");
}

#[test]
fn test_env_probe_ignores_dangling_path() {
    std::env::set_var("CR_RENDER_TEST_DANGLING", "/definitely/not/here");
    let probe = EnvProbe::new(vec!["CR_RENDER_TEST_DANGLING".to_string()]);
    assert!(probe.locate().is_none());
    std::env::remove_var("CR_RENDER_TEST_DANGLING");
}

#[test]
fn test_well_known_scan_picks_first_existing() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("chromium");
    std::fs::write(&present, "#!/bin/sh\n").unwrap();

    let strategy = WellKnownPaths::new(vec![
        dir.path().join("missing-first"),
        present.clone(),
        dir.path().join("never-reached"),
    ]);
    assert_eq!(strategy.locate(), Some(present));
}

#[test]
fn test_discovery_error_lists_standard_strategies() {
    let config = RenderConfig {
        engine_path: None,
        engine_env_vars: vec!["CR_RENDER_TEST_UNSET_VAR".to_string()],
        well_known_paths: vec!["/definitely/not/here".into()],
        managed_environment: false,
        ..RenderConfig::default()
    };
    let err = EngineLocator::from_config(&config).locate().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("configured-path"));
    assert!(message.contains("env-probe"));
    assert!(message.contains("well-known-paths"));
}
