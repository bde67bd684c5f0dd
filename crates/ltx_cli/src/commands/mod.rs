//! CLI command definitions.
//!
//! One subcommand per tool: a document project, a figure, a table, plus a
//! listing of the available templates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ltx_templates::{Generator, ToolConfig};

pub mod new_doc;
pub mod new_fragment;
pub mod templates;

/// ltx - LaTeX project and fragment scaffolding
#[derive(Parser)]
#[command(name = "ltx")]
#[command(version, about = "ltx - LaTeX project and fragment scaffolding")]
#[command(long_about = r#"
ltx creates LaTeX document directories and generates figure and table
fragments from templates, filling in title, author, captions and labels.

COMMANDS:
  new-doc    → Create a document directory (circuit/, tex/, img/, table/) and base document
  new-img    → Create a figure fragment, optionally recorded in the aggregate lists
  new-table  → Create a table fragment, optionally recorded in the aggregate lists
  templates  → List the available templates

TEMPLATES:
  "default" selects the built-in template; any other name is read from
  <template-dir>/<name>.tex.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - User identity unavailable
  4 - Template not found
  5 - Output could not be written
  6 - Aggregate list could not be updated
  7 - Invalid configuration file
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding named templates (defaults to ~/bin/latex_tools/templates)
    #[arg(long, global = true, env = "LTX_TEMPLATE_DIR", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new document directory and base document
    #[command(name = "new-doc")]
    NewDoc(new_doc::NewDocArgs),

    /// Create a new figure fragment
    #[command(name = "new-img")]
    NewImg(new_fragment::NewImgArgs),

    /// Create a new table fragment
    #[command(name = "new-table")]
    NewTable(new_fragment::NewTableArgs),

    /// List available templates
    Templates,
}

/// Working directory, configuration and generator for one invocation.
pub struct Session {
    pub config: ToolConfig,
    pub generator: Generator,
}

impl Session {
    pub fn open(template_dir: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        let config = ToolConfig::discover(&cwd)?;
        let templates_path = config.template_root(template_dir);
        let generator = Generator::new(cwd, templates_path);
        Ok(Self { config, generator })
    }
}
