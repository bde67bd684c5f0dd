//! # ltx_templates
//!
//! Template loading and placeholder substitution for LaTeX project
//! scaffolding.
//!
//! This crate turns a request (document, figure or table) into a generated
//! `.tex` file:
//!
//! - Metadata resolution with defaults derived from the login name, the
//!   current time and the output file name
//! - Built-in or named templates from a template directory
//! - Single-pass `$placeholder` substitution
//! - Appending figures and tables to `listoffloats.tex` / `listofrefs.tex`
//!
//! ## Example
//!
//! ```rust,no_run
//! use ltx_templates::{Ambient, FragmentRequest, Generator};
//!
//! let generator = Generator::new(".", "templates");
//! let ambient = Ambient::capture().unwrap();
//!
//! let request = FragmentRequest::figure()
//!     .with_output("diagram.tex")
//!     .with_caption("System overview")
//!     .with_update(true);
//!
//! let outcome = generator.fragment(&request, &ambient).unwrap();
//! println!("wrote {:?}", outcome.path);
//! ```

pub mod builtin;
pub mod config;
pub mod error;
pub mod generator;
pub mod lists;
pub mod loader;
pub mod metadata;
pub mod renderer;
pub mod request;
pub mod scaffold;

pub use builtin::TemplateKind;
pub use config::ToolConfig;
pub use error::{AggregateList, LtxError, LtxResult};
pub use generator::{DocumentOutcome, FragmentOutcome, Generator};
pub use lists::{ListAppender, FLOATS_LIST, REFS_LIST};
pub use loader::{FsTemplateSource, TemplateLoader, TemplateSource};
pub use metadata::{resolve_document, resolve_fragment, Ambient, DocumentMetadata, FragmentMetadata};
pub use renderer::{substitute, Bindings, TemplateRenderer};
pub use request::{DocumentRequest, FragmentKind, FragmentRequest, TemplateId};
pub use scaffold::{BootstrapReport, ProjectScaffold, PROJECT_SUBDIRS};
