//! Integration tests for the init/start flow.
//!
//! Covers the launcher's ordering contract: starting an uninitialized
//! project runs the full init flow before anything serves, and a second
//! start skips it.

use forkmonkey::cli::init::init_project;
use forkmonkey::cli::start::ensure_initialized;
use forkmonkey::genetics::MonkeyDna;
use forkmonkey::models::ForkMonkeyConfig;
use tempfile::TempDir;

#[test]
fn test_start_initializes_when_marker_absent() {
    let temp = TempDir::new().unwrap();

    assert!(!ForkMonkeyConfig::exists(temp.path()));
    let ran = ensure_initialized(temp.path()).unwrap();
    assert!(ran, "init must run when the marker is absent");

    // Everything the server needs exists before it would bind
    assert!(ForkMonkeyConfig::exists(temp.path()));
    assert!(ForkMonkeyConfig::monkey_path(temp.path()).exists());
    assert!(temp.path().join("web/index.html").exists());
    assert!(temp.path().join("web/monkey.svg").exists());
}

#[test]
fn test_start_skips_init_when_marker_present() {
    let temp = TempDir::new().unwrap();

    ensure_initialized(temp.path()).unwrap();
    let monkey_before = std::fs::read_to_string(ForkMonkeyConfig::monkey_path(temp.path())).unwrap();

    let ran = ensure_initialized(temp.path()).unwrap();
    assert!(!ran, "init must be skipped when the marker is present");

    // The monkey was not regenerated
    let monkey_after = std::fs::read_to_string(ForkMonkeyConfig::monkey_path(temp.path())).unwrap();
    assert_eq!(monkey_before, monkey_after);
}

#[test]
fn test_init_project_scaffold() {
    let temp = TempDir::new().unwrap();
    let dna = init_project(temp.path(), Some("test-monkey"), true).unwrap();

    let config = ForkMonkeyConfig::load(temp.path()).unwrap();
    assert_eq!(config.project_name, "test-monkey");

    // DNA on disk matches what init returned, and passes hash validation
    let loaded = MonkeyDna::load(&ForkMonkeyConfig::monkey_path(temp.path())).unwrap();
    assert_eq!(loaded.dna_hash, dna.dna_hash);
    assert_eq!(loaded.generation, 0);

    // Web assets and the sample hook are in place
    for asset in ["index.html", "styles.css", "app.js", "monkey.svg"] {
        assert!(temp.path().join("web").join(asset).exists(), "missing {}", asset);
    }
    assert!(temp.path().join("hooks/post-commit").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(temp.path().join("hooks/post-commit"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111, "hook script must be executable");
    }
}

#[test]
fn test_init_project_defaults_name_to_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("banana-factory");
    std::fs::create_dir_all(&root).unwrap();

    init_project(&root, None, true).unwrap();
    let config = ForkMonkeyConfig::load(&root).unwrap();
    assert_eq!(config.project_name, "banana-factory");
}

#[test]
fn test_reinit_preserves_customized_hook() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), None, true).unwrap();

    let hook = temp.path().join("hooks/post-commit");
    std::fs::write(&hook, "#!/bin/sh\necho customized\n").unwrap();

    init_project(temp.path(), None, true).unwrap();
    let content = std::fs::read_to_string(&hook).unwrap();
    assert!(content.contains("customized"));
}

#[test]
fn test_rendered_svg_matches_stored_dna() {
    let temp = TempDir::new().unwrap();
    let dna = init_project(temp.path(), None, true).unwrap();

    let svg = std::fs::read_to_string(temp.path().join("web/monkey.svg")).unwrap();
    assert_eq!(
        svg,
        forkmonkey::visualizer::generate_svg(&dna, 400, 400)
    );
}
