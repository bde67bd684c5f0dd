//! Template loading functionality.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::builtin::TemplateKind;
use crate::error::{LtxError, LtxResult};
use crate::request::TemplateId;

/// File extension of named templates.
pub const TEMPLATE_EXT: &str = "tex";

/// Read access to template files.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource {
    fn read_template(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads templates from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTemplateSource;

impl TemplateSource for FsTemplateSource {
    fn read_template(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Template loader.
pub struct TemplateLoader<S = FsTemplateSource> {
    templates_path: PathBuf,
    source: S,
}

impl TemplateLoader {
    /// Create a loader reading from `templates_path` on disk.
    pub fn new(templates_path: impl Into<PathBuf>) -> Self {
        Self::with_source(templates_path, FsTemplateSource)
    }
}

impl<S: TemplateSource> TemplateLoader<S> {
    pub fn with_source(templates_path: impl Into<PathBuf>, source: S) -> Self {
        Self {
            templates_path: templates_path.into(),
            source,
        }
    }

    pub fn templates_path(&self) -> &Path {
        &self.templates_path
    }

    /// Path of the named template `<root>/<identifier>.tex`.
    pub fn template_path(&self, identifier: &str) -> PathBuf {
        self.templates_path
            .join(format!("{}.{}", identifier, TEMPLATE_EXT))
    }

    /// Load the raw text of a template.
    ///
    /// The built-in template is returned without touching the source.
    pub fn load(&self, id: &TemplateId, kind: TemplateKind) -> LtxResult<String> {
        match id {
            TemplateId::Builtin => {
                debug!("Using built-in {:?} template", kind);
                Ok(kind.builtin().to_string())
            }
            TemplateId::Named(identifier) => {
                let path = self.template_path(identifier);
                debug!("Loading template from {:?}", path);
                self.source
                    .read_template(&path)
                    .map_err(|source| LtxError::TemplateNotFound {
                        identifier: identifier.clone(),
                        path,
                        source,
                    })
            }
        }
    }

    /// Identifiers of all available templates, the built-in one first.
    pub fn list_available(&self) -> Vec<String> {
        let mut names = Vec::new();

        if !self.templates_path.is_dir() {
            warn!("Templates directory does not exist: {:?}", self.templates_path);
        } else {
            for entry in WalkDir::new(&self.templates_path)
                .min_depth(1)
                .max_depth(1)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                let is_template = path.is_file()
                    && path.extension().is_some_and(|ext| ext == TEMPLATE_EXT);
                if let (true, Some(stem)) = (is_template, path.file_stem()) {
                    names.push(stem.to_string_lossy().into_owned());
                }
            }
            names.sort();
        }

        names.retain(|name| name != TemplateId::BUILTIN);
        names.insert(0, TemplateId::BUILTIN.to_string());
        names
    }
}
