//! Git hook installation via symlinks.
//!
//! Hook scripts live in the project's `hooks/` directory and are linked into
//! the repository's hooks directory so git picks them up. Installing is
//! idempotent: an existing entry at the destination is replaced.

use std::fs;
use std::path::{Path, PathBuf};

/// Result type for hook operations
pub type HookResult<T> = Result<T, HookError>;

/// Errors that can occur while managing git hooks
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Hooks source directory not found: {0}")]
    MissingSource(PathBuf),

    #[error("Not inside a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Failed to link {name}: {source}")]
    Link {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Installation state of one hook script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookState {
    /// Symlink in the hooks directory points at our script
    Installed,
    /// Nothing at the destination
    NotInstalled,
    /// Destination exists but is not our symlink
    Conflict,
}

/// One hook script and its current state
#[derive(Debug, Clone)]
pub struct HookStatus {
    pub name: String,
    pub state: HookState,
}

/// Links hook scripts from a source directory into a git hooks directory
pub struct HookInstaller {
    source_dir: PathBuf,
    hooks_dir: PathBuf,
}

impl HookInstaller {
    /// Locate the enclosing repository's hooks directory for a project root
    pub fn discover(project_root: &Path, source_dir: &Path) -> HookResult<Self> {
        let repo = git2::Repository::discover(project_root)
            .map_err(|_| HookError::NotARepository(project_root.to_path_buf()))?;
        let hooks_dir = repo.path().join("hooks");
        Self::new(source_dir, &hooks_dir)
    }

    /// Build an installer over explicit directories
    pub fn new(source_dir: &Path, hooks_dir: &Path) -> HookResult<Self> {
        if !source_dir.is_dir() {
            return Err(HookError::MissingSource(source_dir.to_path_buf()));
        }
        let source_dir = source_dir.canonicalize()?;
        Ok(Self {
            source_dir,
            hooks_dir: hooks_dir.to_path_buf(),
        })
    }

    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    /// Hook scripts eligible for installation: regular, non-hidden files
    fn eligible_scripts(&self) -> HookResult<Vec<PathBuf>> {
        let mut scripts = Vec::new();
        for entry in fs::read_dir(&self.source_dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }
            if !entry.file_type()?.is_file() {
                continue;
            }
            scripts.push(path);
        }
        scripts.sort();
        Ok(scripts)
    }

    /// Link every eligible script into the hooks directory, replacing
    /// whatever is at the destination. Returns the installed hook names.
    pub fn install(&self) -> HookResult<Vec<String>> {
        fs::create_dir_all(&self.hooks_dir)?;

        let mut installed = Vec::new();
        for script in self.eligible_scripts()? {
            let name = script
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let dest = self.hooks_dir.join(&name);

            // symlink_metadata also catches dangling links
            if dest.symlink_metadata().is_ok() {
                fs::remove_file(&dest).map_err(|source| HookError::Link {
                    name: name.clone(),
                    source,
                })?;
            }

            link_script(&script, &dest).map_err(|source| HookError::Link {
                name: name.clone(),
                source,
            })?;

            installed.push(name);
        }

        Ok(installed)
    }

    /// Remove hooks-directory symlinks that point back into the source
    /// directory. Returns the removed hook names.
    pub fn uninstall(&self) -> HookResult<Vec<String>> {
        let mut removed = Vec::new();
        if !self.hooks_dir.is_dir() {
            return Ok(removed);
        }

        for entry in fs::read_dir(&self.hooks_dir)? {
            let entry = entry?;
            let dest = entry.path();
            if let Ok(target) = fs::read_link(&dest) {
                if target.starts_with(&self.source_dir) {
                    fs::remove_file(&dest)?;
                    removed.push(entry.file_name().to_string_lossy().to_string());
                }
            }
        }

        removed.sort();
        Ok(removed)
    }

    /// State of each eligible script
    pub fn status(&self) -> HookResult<Vec<HookStatus>> {
        let mut statuses = Vec::new();
        for script in self.eligible_scripts()? {
            let name = script
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let dest = self.hooks_dir.join(&name);

            let state = match fs::read_link(&dest) {
                Ok(target) if target == script => HookState::Installed,
                Ok(_) => HookState::Conflict,
                Err(_) if dest.exists() => HookState::Conflict,
                Err(_) => HookState::NotInstalled,
            };

            statuses.push(HookStatus { name, state });
        }
        Ok(statuses)
    }
}

#[cfg(unix)]
fn link_script(source: &Path, dest: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, dest)
}

// Symlinks need elevated rights on Windows; fall back to copying.
#[cfg(not(unix))]
fn link_script(source: &Path, dest: &Path) -> std::io::Result<()> {
    fs::copy(source, dest).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, HookInstaller) {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("hooks");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("pre-commit"), "#!/bin/sh\nexit 0\n").unwrap();
        fs::write(source.join("post-commit"), "#!/bin/sh\nexit 0\n").unwrap();
        fs::write(source.join(".hidden"), "skip me").unwrap();
        fs::create_dir_all(source.join("subdir")).unwrap();

        let hooks_dir = temp.path().join(".git/hooks");
        let installer = HookInstaller::new(&source, &hooks_dir).unwrap();
        (temp, installer)
    }

    #[test]
    fn test_install_links_every_eligible_file() {
        let (temp, installer) = setup();
        let installed = installer.install().unwrap();
        assert_eq!(installed, vec!["post-commit", "pre-commit"]);

        let link = temp.path().join(".git/hooks/pre-commit");
        let target = fs::read_link(&link).unwrap();
        assert_eq!(target, temp.path().join("hooks/pre-commit").canonicalize().unwrap());

        // hidden files and directories are skipped
        assert!(!temp.path().join(".git/hooks/.hidden").exists());
        assert!(!temp.path().join(".git/hooks/subdir").exists());
    }

    #[test]
    fn test_install_twice_is_idempotent() {
        let (_temp, installer) = setup();
        let first = installer.install().unwrap();
        let second = installer.install().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_install_replaces_existing_entry() {
        let (temp, installer) = setup();
        let hooks_dir = temp.path().join(".git/hooks");
        fs::create_dir_all(&hooks_dir).unwrap();
        fs::write(hooks_dir.join("pre-commit"), "old contents").unwrap();

        installer.install().unwrap();
        assert!(fs::read_link(hooks_dir.join("pre-commit")).is_ok());
    }

    #[test]
    fn test_uninstall_removes_only_our_links() {
        let (temp, installer) = setup();
        installer.install().unwrap();

        // A foreign hook stays untouched
        let foreign = temp.path().join(".git/hooks/commit-msg");
        fs::write(&foreign, "#!/bin/sh\n").unwrap();

        let removed = installer.uninstall().unwrap();
        assert_eq!(removed, vec!["post-commit", "pre-commit"]);
        assert!(foreign.exists());
        assert!(!temp.path().join(".git/hooks/pre-commit").exists());
    }

    #[test]
    fn test_status_reports_states() {
        let (temp, installer) = setup();

        for status in installer.status().unwrap() {
            assert_eq!(status.state, HookState::NotInstalled);
        }

        installer.install().unwrap();
        for status in installer.status().unwrap() {
            assert_eq!(status.state, HookState::Installed);
        }

        // Replace one link with a regular file
        let dest = temp.path().join(".git/hooks/pre-commit");
        fs::remove_file(&dest).unwrap();
        fs::write(&dest, "something else").unwrap();
        let statuses = installer.status().unwrap();
        let pre = statuses.iter().find(|s| s.name == "pre-commit").unwrap();
        assert_eq!(pre.state, HookState::Conflict);
    }

    #[test]
    fn test_missing_source_dir_errors() {
        let temp = TempDir::new().unwrap();
        let result = HookInstaller::new(&temp.path().join("nope"), &temp.path().join("hooks"));
        assert!(matches!(result, Err(HookError::MissingSource(_))));
    }

    #[test]
    fn test_discover_finds_repo_hooks_dir() {
        let temp = TempDir::new().unwrap();
        git2::Repository::init(temp.path()).unwrap();
        let source = temp.path().join("hooks");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("post-commit"), "#!/bin/sh\n").unwrap();

        let installer = HookInstaller::discover(temp.path(), &source).unwrap();
        assert!(installer.hooks_dir().ends_with("hooks"));

        let installed = installer.install().unwrap();
        assert_eq!(installed, vec!["post-commit"]);
    }

    #[test]
    fn test_discover_outside_repo_errors() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("hooks");
        fs::create_dir_all(&source).unwrap();

        let result = HookInstaller::discover(temp.path(), &source);
        assert!(matches!(result, Err(HookError::NotARepository(_))));
    }
}
