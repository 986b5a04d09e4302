//! Integration tests for git hook installation against a real repository.

use forkmonkey::hooks::{HookInstaller, HookState};
use std::fs;
use tempfile::TempDir;

fn setup_repo() -> (TempDir, HookInstaller) {
    let temp = TempDir::new().unwrap();
    git2::Repository::init(temp.path()).unwrap();

    let source = temp.path().join("hooks");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("pre-commit"), "#!/bin/sh\nexit 0\n").unwrap();
    fs::write(source.join("post-commit"), "#!/bin/sh\nexit 0\n").unwrap();

    let installer = HookInstaller::discover(temp.path(), &source).unwrap();
    (temp, installer)
}

#[test]
fn test_install_into_real_repo() {
    let (temp, installer) = setup_repo();
    let installed = installer.install().unwrap();
    assert_eq!(installed, vec!["post-commit", "pre-commit"]);

    // Links land in the discovered .git/hooks directory
    let link = temp.path().join(".git/hooks/pre-commit");
    let target = fs::read_link(&link).unwrap();
    assert_eq!(
        target,
        temp.path().join("hooks/pre-commit").canonicalize().unwrap()
    );
}

#[test]
fn test_install_from_subdirectory_finds_repo() {
    let (temp, _) = setup_repo();

    // Discovery walks up from a nested working directory
    let nested = temp.path().join("src/deep");
    fs::create_dir_all(&nested).unwrap();
    let installer = HookInstaller::discover(&nested, &temp.path().join("hooks")).unwrap();

    installer.install().unwrap();
    assert!(temp.path().join(".git/hooks/post-commit").exists());
}

#[test]
fn test_reinstall_is_idempotent() {
    let (_temp, installer) = setup_repo();
    let first = installer.install().unwrap();
    let second = installer.install().unwrap();
    assert_eq!(first, second);

    for status in installer.status().unwrap() {
        assert_eq!(status.state, HookState::Installed);
    }
}

#[test]
fn test_uninstall_round_trip() {
    let (temp, installer) = setup_repo();
    installer.install().unwrap();

    let removed = installer.uninstall().unwrap();
    assert_eq!(removed, vec!["post-commit", "pre-commit"]);
    assert!(!temp.path().join(".git/hooks/pre-commit").exists());

    for status in installer.status().unwrap() {
        assert_eq!(status.state, HookState::NotInstalled);
    }
}
