//! Project directory scaffolding and output materialization.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{LtxError, LtxResult};
use crate::request::FragmentKind;

/// Conventional subdirectories of a document project.
pub const PROJECT_SUBDIRS: [&str; 4] = ["circuit", "tex", "img", "table"];

/// Outcome of bootstrapping a project directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub created: Vec<PathBuf>,
    /// Directories that already existed and were skipped.
    pub existing: Vec<PathBuf>,
}

/// Creates project layouts and writes generated files below a root.
pub struct ProjectScaffold {
    root: PathBuf,
}

impl ProjectScaffold {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the conventional subdirectories under `directory`.
    ///
    /// Existing directories are reported, not treated as errors.
    pub fn bootstrap(&self, directory: &Path) -> LtxResult<BootstrapReport> {
        let project = self.root.join(directory);
        info!("Bootstrapping project directory {:?}", project);
        fs::create_dir_all(&project).map_err(|e| LtxError::destination(&project, e))?;

        let mut report = BootstrapReport::default();
        for subdir in PROJECT_SUBDIRS {
            let path = project.join(subdir);
            match fs::create_dir(&path) {
                Ok(()) => {
                    debug!("Created {:?}", path);
                    report.created.push(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => {
                    debug!("Directory {:?} already exists, skipping", path);
                    report.existing.push(path);
                }
                Err(e) => return Err(LtxError::destination(path, e)),
            }
        }
        Ok(report)
    }

    /// Write `contents` to `relative`, creating parent directories and
    /// overwriting any existing file.
    pub fn write(&self, relative: &Path, contents: &str) -> LtxResult<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LtxError::destination(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| LtxError::destination(&path, e))?;
        info!("Wrote {:?}", path);
        Ok(path)
    }

    /// Effective directory of a fragment: below the kind's conventional
    /// directory when the project has one, else below the root.
    pub fn fragment_dir(&self, kind: FragmentKind, directory: &str) -> String {
        let base = if self.root.join(kind.conventional_dir()).is_dir() {
            format!("./{}", kind.conventional_dir())
        } else {
            "./".to_string()
        };

        let sub = directory.trim_start_matches("./");
        if sub.is_empty() || sub.ends_with('/') {
            format!("{}{}", base, sub)
        } else {
            format!("{}{}/", base, sub)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bootstrap_creates_layout() {
        let temp = tempdir().unwrap();
        let scaffold = ProjectScaffold::new(temp.path());
        let report = scaffold.bootstrap(Path::new("paper")).unwrap();

        assert_eq!(report.created.len(), PROJECT_SUBDIRS.len());
        assert!(report.existing.is_empty());
        for subdir in PROJECT_SUBDIRS {
            assert!(temp.path().join("paper").join(subdir).is_dir());
        }
    }

    #[test]
    fn test_bootstrap_tolerates_existing_dir() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("paper/img")).unwrap();

        let scaffold = ProjectScaffold::new(temp.path());
        let report = scaffold.bootstrap(Path::new("paper")).unwrap();

        assert_eq!(report.existing, vec![temp.path().join("paper/img")]);
        assert_eq!(report.created.len(), 3);
        assert!(temp.path().join("paper/table").is_dir());
        assert!(temp.path().join("paper/circuit").is_dir());
    }

    #[test]
    fn test_bootstrap_fails_on_file_in_the_way() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("paper")).unwrap();
        fs::write(temp.path().join("paper/tex"), "").unwrap();

        let scaffold = ProjectScaffold::new(temp.path());
        let err = scaffold.bootstrap(Path::new("paper")).unwrap_err();
        assert!(matches!(err, LtxError::DestinationWrite { .. }));
    }

    #[test]
    fn test_write_overwrites() {
        let temp = tempdir().unwrap();
        let scaffold = ProjectScaffold::new(temp.path());
        scaffold.write(Path::new("a/b.tex"), "first").unwrap();
        let path = scaffold.write(Path::new("a/b.tex"), "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_fragment_dir_uses_conventional_parent() {
        let temp = tempdir().unwrap();
        let scaffold = ProjectScaffold::new(temp.path());
        assert_eq!(scaffold.fragment_dir(FragmentKind::Figure, ""), "./");
        assert_eq!(scaffold.fragment_dir(FragmentKind::Figure, "plots"), "./plots/");

        fs::create_dir(temp.path().join("img")).unwrap();
        assert_eq!(scaffold.fragment_dir(FragmentKind::Figure, ""), "./img/");
        assert_eq!(scaffold.fragment_dir(FragmentKind::Figure, "plots/"), "./img/plots/");
        assert_eq!(scaffold.fragment_dir(FragmentKind::Table, "x"), "./x/");
    }
}
