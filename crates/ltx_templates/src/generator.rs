//! Generation pipeline: resolve, load, substitute, write, record.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::builtin::TemplateKind;
use crate::error::LtxResult;
use crate::lists::ListAppender;
use crate::loader::{FsTemplateSource, TemplateLoader, TemplateSource};
use crate::metadata::{resolve_document, resolve_fragment, Ambient};
use crate::renderer::TemplateRenderer;
use crate::request::{DocumentRequest, FragmentRequest};
use crate::scaffold::{BootstrapReport, ProjectScaffold};

/// Result of generating a document skeleton.
#[derive(Debug)]
pub struct DocumentOutcome {
    /// Written document file.
    pub path: PathBuf,
    /// Directory the document lives in.
    pub directory: PathBuf,
    pub bootstrap: BootstrapReport,
}

/// Result of generating a fragment.
#[derive(Debug)]
pub struct FragmentOutcome {
    /// Written fragment file.
    pub path: PathBuf,
    /// Fragment path as referenced from the floats list.
    pub reference: String,
    pub label: String,
    /// Whether the aggregate lists were updated.
    pub lists_updated: bool,
}

/// Runs requests against a working directory and a template root.
pub struct Generator<S = FsTemplateSource> {
    loader: TemplateLoader<S>,
    renderer: TemplateRenderer,
    scaffold: ProjectScaffold,
    lists: ListAppender,
}

impl Generator {
    /// Create a generator for `working_dir` reading named templates from
    /// `templates_path`.
    pub fn new(working_dir: impl Into<PathBuf>, templates_path: impl Into<PathBuf>) -> Self {
        Self::with_loader(working_dir, TemplateLoader::new(templates_path))
    }
}

impl<S: TemplateSource> Generator<S> {
    pub fn with_loader(working_dir: impl Into<PathBuf>, loader: TemplateLoader<S>) -> Self {
        let working_dir = working_dir.into();
        Self {
            loader,
            renderer: TemplateRenderer::new(),
            scaffold: ProjectScaffold::new(working_dir.clone()),
            lists: ListAppender::new(working_dir),
        }
    }

    pub fn working_dir(&self) -> &Path {
        self.scaffold.root()
    }

    pub fn loader(&self) -> &TemplateLoader<S> {
        &self.loader
    }

    /// Bootstrap a document directory and write its base document.
    ///
    /// The template is loaded before anything is created, so a missing
    /// template leaves the filesystem untouched.
    pub fn document(
        &self,
        request: &DocumentRequest,
        ambient: &Ambient,
    ) -> LtxResult<DocumentOutcome> {
        let metadata = resolve_document(request, ambient);
        let template = self.loader.load(&request.template, TemplateKind::Document)?;
        let contents = self.renderer.render(&template, &metadata);

        let bootstrap = self.scaffold.bootstrap(&request.directory)?;
        let path = self
            .scaffold
            .write(&request.directory.join(&request.output), &contents)?;

        info!("Created document {:?} for {}", path, metadata.author);
        Ok(DocumentOutcome {
            path,
            directory: self.scaffold.root().join(&request.directory),
            bootstrap,
        })
    }

    /// Write a figure or table fragment and optionally record it in the
    /// aggregate lists.
    pub fn fragment(
        &self,
        request: &FragmentRequest,
        ambient: &Ambient,
    ) -> LtxResult<FragmentOutcome> {
        let dir = self.scaffold.fragment_dir(request.kind, &request.directory);
        let metadata = resolve_fragment(request, &dir, ambient);
        let template = self.loader.load(&request.template, request.kind.into())?;
        let contents = self.renderer.render(&template, &metadata);

        let reference = format!("{}{}", dir, request.output);
        let path = self.scaffold.write(Path::new(&reference), &contents)?;

        let lists_updated = self.lists.update(
            request.kind,
            &reference,
            &metadata.label,
            request.update,
        )?;

        info!("Created {} {:?} labelled '{}'", request.kind, path, metadata.label);
        Ok(FragmentOutcome {
            path,
            reference,
            label: metadata.label,
            lists_updated,
        })
    }
}
